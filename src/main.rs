use std::process;

use env_logger;
use log::{error, info};

use crate::config::init_config;
use crate::geocode::arcgis::ArcGisGeocoder;
use crate::records::reader::RecordReader;
use crate::records::writer::RecordWriter;

mod config;
mod geocode;
mod pipeline;
mod records;

fn main() {
    std::env::set_var("RUST_LOG", "info");
    env_logger::init();

    let config = init_config();

    let reader = match RecordReader::from_path(&config.input_path) {
        Ok(reader) => reader,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };
    let writer = match RecordWriter::from_path(&config.output_path) {
        Ok(writer) => writer,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    info!("Geocoding {} into {}", config.input_path, config.output_path);
    let geocoder = ArcGisGeocoder::new(config.geocoder_url);

    if let Err(err) = pipeline::run(reader, writer, &geocoder, &config.options) {
        error!("Run aborted: {}", err);
        process::exit(1);
    }
}
