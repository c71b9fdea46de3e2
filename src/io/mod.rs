pub mod layout_schema;
pub mod parsed_layout;
pub mod report;
