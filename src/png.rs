use anyhow::{anyhow, Context, Result};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;

/// Append one chunk: big-endian payload length, tag, payload, then the
/// CRC-32 of tag + payload.
pub fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) -> Result<()> {
    let len = u32::try_from(payload.len())
        .map_err(|_| anyhow!("chunk {} too large: {} bytes", tag_str(tag), payload.len()))?;

    let mut crc = crc32fast::Hasher::new();
    crc.update(tag);
    crc.update(payload);

    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    out.extend_from_slice(&crc.finalize().to_be_bytes());
    Ok(())
}

fn tag_str(tag: &[u8; 4]) -> String {
    String::from_utf8_lossy(tag).into_owned()
}

fn ihdr(width: u32, height: u32) -> [u8; 13] {
    let mut h = [0u8; 13];
    h[0..4].copy_from_slice(&width.to_be_bytes());
    h[4..8].copy_from_slice(&height.to_be_bytes());
    h[8] = BIT_DEPTH;
    h[9] = COLOR_TYPE_RGBA;
    // compression, filter and interlace methods stay 0
    h
}

/// Encode an 8-bit RGBA buffer as a non-interlaced PNG.
///
/// Every scanline uses filter type 0 and the image data goes into a single
/// IDAT chunk compressed at the best deflate level.
pub fn encode_rgba(width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(anyhow!("PNG dimensions must be non-zero, got {width}x{height}"));
    }
    let stride = width as usize * 4;
    let expected = stride * height as usize;
    if pixels.len() != expected {
        return Err(anyhow!(
            "pixel buffer is {} bytes, expected {expected} for {width}x{height} RGBA",
            pixels.len()
        ));
    }

    let mut raw = Vec::with_capacity(expected + height as usize);
    for row in pixels.chunks_exact(stride) {
        raw.push(FILTER_NONE);
        raw.extend_from_slice(row);
    }

    let mut z = ZlibEncoder::new(Vec::new(), Compression::best());
    z.write_all(&raw).context("deflate image data")?;
    let compressed = z.finish().context("finish deflate stream")?;

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + compressed.len() + 3 * 12 + 13);
    out.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr(width, height))?;
    write_chunk(&mut out, b"IDAT", &compressed)?;
    write_chunk(&mut out, b"IEND", &[])?;
    Ok(out)
}
