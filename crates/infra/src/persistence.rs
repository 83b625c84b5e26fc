pub mod csv_codec;
pub mod file_reader;
pub mod file_writer;

pub use csv_codec::CsvDatasetCodec;
pub use file_reader::FileReader;
pub use file_writer::FileWriter;
