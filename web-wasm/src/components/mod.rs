pub mod header;
pub mod upload_area;
pub mod analysis_banner;
pub mod report_list;
