pub mod list_params;
pub mod record_id;
pub mod validated_json;
