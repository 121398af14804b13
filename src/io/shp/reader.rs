//! Shapefile reader: the entry point that decodes a whole `.shp` buffer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use shpjson::ShpReader;
//!
//! let shp = ShpReader::from_file("countries.shp")?.read()?;
//! let geojson = shp.to_geojson()?;
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, trace};

use crate::error::{Result, ShpError};
use crate::geojson::{self, GeoJsonOutput};
use crate::io::byte_reader::{ByteReader, ByteSource, FloatDecoding};
use crate::notification::{NotificationCollection, NotificationType};

use super::constants::RECORD_HEADER_SIZE;
use super::header::{decode_header, ShpHeader};
use super::record::{decode_next_record, ShpRecord};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration options for the shapefile reader.
#[derive(Debug, Clone)]
pub struct ShpReaderConfiguration {
    /// When `true`, an error inside the record sequence stops decoding but
    /// the records read so far are returned, with the error kept in
    /// [`ShpFile::stop_error`] and reported as a notification.
    ///
    /// Default: `true`. Set to `false` for strict mode, where the first
    /// record error is returned and the decoded records are dropped.
    pub failsafe: bool,

    /// How 64-bit floats are decoded.
    pub float_decoding: FloatDecoding,
}

impl Default for ShpReaderConfiguration {
    fn default() -> Self {
        Self {
            failsafe: true,
            float_decoding: FloatDecoding::default(),
        }
    }
}

impl ShpReaderConfiguration {
    /// Configuration that propagates the first record error.
    pub fn strict() -> Self {
        Self {
            failsafe: false,
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// ShpFile
// ---------------------------------------------------------------------------

/// Result of a decode pass.
#[derive(Debug)]
pub struct ShpFile {
    pub header: ShpHeader,
    pub records: Vec<ShpRecord>,
    /// Non-fatal findings collected while reading.
    pub notifications: NotificationCollection,
    /// Error that ended the record loop early. Always `None` in strict mode.
    pub stop_error: Option<ShpError>,
}

impl ShpFile {
    /// Whether every record up to the end of the buffer was decoded.
    pub fn is_complete(&self) -> bool {
        self.stop_error.is_none()
    }

    /// Convert the decoded records to the GeoJSON output structure.
    pub fn to_geojson(&self) -> Result<GeoJsonOutput> {
        geojson::to_geojson(&self.records)
    }
}

// ---------------------------------------------------------------------------
// ShpReader
// ---------------------------------------------------------------------------

/// Shapefile reader over any [`ByteSource`].
pub struct ShpReader<S: ByteSource> {
    source: S,
    config: ShpReaderConfiguration,
}

impl ShpReader<Vec<u8>> {
    /// Load a `.shp` file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load the entire stream into memory.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::from_bytes(data))
    }
}

impl<S: ByteSource> ShpReader<S> {
    /// Create a reader over bytes already in memory.
    pub fn from_bytes(source: S) -> Self {
        Self {
            source,
            config: ShpReaderConfiguration::default(),
        }
    }

    /// Set configuration options.
    pub fn with_config(mut self, config: ShpReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Decode the header and every record.
    ///
    /// Header errors always fail. A record error ends the loop and is kept in
    /// [`ShpFile::stop_error`] next to the records decoded before it, unless
    /// the reader is in strict mode, where it is returned instead.
    pub fn read(self) -> Result<ShpFile> {
        let failsafe = self.config.failsafe;
        let mut reader =
            ByteReader::new(self.source).with_float_decoding(self.config.float_decoding);
        let mut notifications = NotificationCollection::new();

        let header = decode_header(&mut reader)?;
        debug!(
            "parsed header: version {}, shape type {}, {} words",
            header.version, header.shape_type, header.file_length
        );

        if header.file_length_bytes() != reader.len() as i64 {
            notifications.notify(
                NotificationType::Warning,
                format!(
                    "header declares {} bytes but the buffer holds {}",
                    header.file_length_bytes(),
                    reader.len()
                ),
            );
        }

        let mut records = Vec::new();
        let mut stop_error = None;
        loop {
            let start = reader.position();
            match decode_next_record(&mut reader) {
                Ok(Some(record)) => {
                    trace!(
                        "record {} at offset {start}: {}",
                        record.number,
                        record.shape_type()
                    );
                    check_record(&header, &record, reader.position() - start, &mut notifications);
                    records.push(record);
                }
                Ok(None) => break,
                Err(err) if failsafe => {
                    notifications.notify(
                        NotificationType::Error,
                        format!(
                            "decoding stopped at offset {start} after {} records: {err}",
                            records.len()
                        ),
                    );
                    stop_error = Some(err);
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        debug!("parsed {} records", records.len());

        Ok(ShpFile {
            header,
            records,
            notifications,
            stop_error,
        })
    }
}

fn check_record(
    header: &ShpHeader,
    record: &ShpRecord,
    consumed: usize,
    notifications: &mut NotificationCollection,
) {
    let payload = consumed as i64 - (RECORD_HEADER_SIZE as i64 + 4);
    if payload != record.content_length_bytes() {
        notifications.notify(
            NotificationType::Warning,
            format!(
                "record {} declares {} payload bytes but {} were decoded",
                record.number,
                record.content_length_bytes(),
                payload
            ),
        );
    }

    if record.shape_type().code() != header.shape_type {
        notifications.notify(
            NotificationType::Warning,
            format!(
                "record {} has shape type {} but the header declares {}",
                record.number,
                record.shape_type(),
                header.shape_type
            ),
        );
    }
}
