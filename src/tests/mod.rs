use log::LevelFilter;
use std::sync::Once;

mod data;

pub use data::{
    decaying_record, element_text, iss_record, numbered_record, patch_data_line, ISS_LINE1,
    ISS_LINE2, ISS_NAME,
};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}
