// Sequential record walk over a byte source.

use super::fixed::decode_fixed;
use super::narrow::{to_index, to_meta_byte, to_text_byte};
use crate::error::{keys, MatError, MatResult};
use crate::format::{AttributeKind, ElementType, Numbering, RecordHeader, Schema};
use crate::model::Text;
use crate::source::ByteSource;
use log::{debug, trace};

/// Decoded payload of one attribute record.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeData {
    Bytes(Vec<u8>),
    Text(Text),
    Indices(Vec<u32>),
    Floats(Vec<f32>),
}

impl AttributeData {
    /// Element count declared by the record header.
    pub fn len(&self) -> usize {
        match self {
            Self::Bytes(v) => v.len(),
            Self::Text(t) => t.len(),
            Self::Indices(v) => v.len(),
            Self::Floats(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<Text> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn into_indices(self) -> Option<Vec<u32>> {
        match self {
            Self::Indices(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_floats(self) -> Option<Vec<f32>> {
        match self {
            Self::Floats(v) => Some(v),
            _ => None,
        }
    }
}

/// Find the first record of `kind` belonging to entity `entity` and decode it.
///
/// Returns `Ok(None)` when the stream holds no such record. Later records with
/// the same entity and kind are never looked at.
pub fn scan<S: ByteSource + ?Sized>(
    source: &mut S,
    schema: &Schema,
    entity: u32,
    kind: AttributeKind,
) -> MatResult<Option<AttributeData>> {
    source.seek(schema.data_start)?;
    let total = source.size();
    let mut seen: u64 = 0;

    while source.head() < total {
        let offset = source.head();
        if source.remaining() < RecordHeader::SIZE {
            return Err(MatError::truncated(
                keys::TRUNCATED_HEADER,
                offset,
                RecordHeader::SIZE,
                source.remaining(),
            ));
        }

        let header = RecordHeader::read(source)?;
        let payload_len = header.payload_len();
        if payload_len > source.remaining() {
            return Err(MatError::truncated(
                keys::TRUNCATED_RECORD,
                offset,
                payload_len,
                source.remaining(),
            )
            .with_arg("kind", header.kind.label()));
        }

        if header.kind.code() == kind.code() {
            let matched = match schema.numbering {
                Numbering::Explicit => header.entity_id == entity,
                Numbering::Implicit => {
                    let index = seen;
                    seen += 1;
                    index == u64::from(entity)
                }
            };
            if matched {
                debug!(
                    "{} record for entity {} at offset {}: {} elements, format {:#04x}",
                    kind.label(),
                    entity,
                    offset,
                    header.count,
                    header.format.0
                );
                return read_payload(source, &header).map(Some);
            }
        }

        trace!(
            "skipping {} record (id {}) at offset {}, {} bytes",
            header.kind.label(),
            header.entity_id,
            offset,
            payload_len
        );
        source.skip(payload_len)?;
    }

    Ok(None)
}

fn read_payload<S: ByteSource + ?Sized>(
    source: &mut S,
    header: &RecordHeader,
) -> MatResult<AttributeData> {
    let count = header.count as usize;
    let integer = header.format.integer_bytes();
    let fraction = header.format.fraction_bytes();
    let mut next = || decode_fixed(&mut *source, integer, fraction);

    let data = match header.kind.element_type() {
        ElementType::Byte => AttributeData::Bytes(collect(header, 0, &mut next, to_meta_byte)?),
        ElementType::Text => {
            // one spare slot for the terminator Text appends
            let payload = collect(header, 1, &mut next, to_text_byte)?;
            AttributeData::Text(Text::from_payload(payload))
        }
        ElementType::Index => AttributeData::Indices(collect(header, 0, &mut next, to_index)?),
        ElementType::Float => AttributeData::Floats(collect(header, 0, &mut next, |v| v)?),
    };
    debug_assert_eq!(data.len(), count);
    Ok(data)
}

fn collect<T>(
    header: &RecordHeader,
    spare: usize,
    next: &mut impl FnMut() -> MatResult<f32>,
    narrow: impl Fn(f32) -> T,
) -> MatResult<Vec<T>> {
    let count = header.count as usize;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(count.saturating_add(spare))
        .map_err(|e| {
            MatError::new(keys::ALLOCATION_FAILED)
                .with_arg("kind", header.kind.label())
                .with_arg("count", count)
                .push_std(e)
        })?;
    for _ in 0..count {
        buffer.push(narrow(next()?));
    }
    Ok(buffer)
}
