use crate::bitio::{BitReader, BitWriter};
use crate::constants::{BITS_PER_CHANNEL, CHANNEL_CLEAR_MASK, DATA_CHANNELS, GROUP_MASK};
use crate::error::StegoError;
use image::RgbaImage;
use std::io::{self, Read, Write};

pub fn capacity_bits(width: u32, height: u32) -> u64 {
    u64::from(width) * u64::from(height) * DATA_CHANNELS as u64 * u64::from(BITS_PER_CHANNEL)
}

pub fn capacity_bytes(width: u32, height: u32) -> u64 {
    capacity_bits(width, height) / 8
}

pub fn embed<R: Read>(
    mut carrier: RgbaImage,
    payload: &mut BitReader<R>,
) -> Result<RgbaImage, StegoError> {
    let mut exhausted = false;

    'scan: for pixel in carrier.pixels_mut() {
        for channel in pixel.0[..DATA_CHANNELS].iter_mut() {
            match payload.read_bits(BITS_PER_CHANNEL)? {
                Some(group) => *channel = (*channel & CHANNEL_CLEAR_MASK) | group as u8,
                None => {
                    exhausted = true;
                    break 'scan;
                }
            }
        }
    }

    if !exhausted && payload.read_bits(BITS_PER_CHANNEL)?.is_some() {
        let (width, height) = carrier.dimensions();
        return Err(StegoError::CapacityExceeded {
            capacity_bytes: capacity_bytes(width, height),
        });
    }

    Ok(carrier)
}

pub fn extract<W: Write>(carrier: &RgbaImage, mut payload: BitWriter<W>) -> io::Result<W> {
    for pixel in carrier.pixels() {
        for &channel in pixel.0[..DATA_CHANNELS].iter() {
            payload.write_bits(u64::from(channel & GROUP_MASK), BITS_PER_CHANNEL)?;
        }
    }

    payload.close()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    fn solid_carrier(width: u32, height: u32, fill: u8) -> RgbaImage {
        ImageBuffer::from_pixel(width, height, Rgba([fill, fill, fill, 0x80]))
    }

    #[test]
    fn capacity_follows_the_six_bits_per_pixel_formula() {
        assert_eq!(capacity_bits(2, 2), 24);
        assert_eq!(capacity_bytes(2, 2), 3);
        assert_eq!(capacity_bytes(1, 1), 0);
        assert_eq!(capacity_bytes(100, 100), 7500);
    }

    #[test]
    fn embed_overwrites_channels_in_scan_order_and_stops_on_exhaustion() {
        let carrier = solid_carrier(2, 2, 0xFF);
        // 0x41 = 位组 01, 00, 00, 01
        let data = [0x41u8];
        let mut payload = BitReader::new(data.as_slice());

        let embedded = embed(carrier, &mut payload).unwrap();

        assert_eq!(embedded.get_pixel(0, 0).0, [0xFD, 0xFC, 0xFC, 0x80]);
        // 第 4 个位组写入第二个像素的红色通道后载荷耗尽，
        // 该像素的绿、蓝通道以及后续像素保持原样。
        assert_eq!(embedded.get_pixel(1, 0).0, [0xFD, 0xFF, 0xFF, 0x80]);
        assert_eq!(embedded.get_pixel(0, 1).0, [0xFF, 0xFF, 0xFF, 0x80]);
        assert_eq!(embedded.get_pixel(1, 1).0, [0xFF, 0xFF, 0xFF, 0x80]);
    }

    #[test]
    fn embed_rejects_payload_beyond_capacity() {
        let carrier = solid_carrier(1, 1, 0x00);

        let data = [0xAAu8];
        let mut payload = BitReader::new(data.as_slice());
        let result = embed(carrier, &mut payload);

        assert!(matches!(
            result,
            Err(StegoError::CapacityExceeded { capacity_bytes: 0 })
        ));
    }

    #[test]
    fn embed_accepts_payload_at_exact_capacity() {
        let carrier = solid_carrier(2, 2, 0x00);
        let data = [0xDE, 0xAD, 0xBE];

        let mut payload = BitReader::new(data.as_slice());
        let embedded = embed(carrier, &mut payload).unwrap();

        let recovered = extract(&embedded, BitWriter::new(Vec::new())).unwrap();
        assert_eq!(recovered, data);
    }

    #[test]
    fn embed_preserves_alpha_and_high_channel_bits() {
        let carrier: RgbaImage = ImageBuffer::from_fn(4, 4, |x, y| {
            Rgba([
                (x * 16 + y) as u8,
                (x * 32 + y) as u8,
                (x + y * 8) as u8,
                (x * 50 + y * 3) as u8,
            ])
        });
        let original = carrier.clone();
        let data = [0x12u8, 0x34, 0x56];
        let mut payload = BitReader::new(data.as_slice());

        let embedded = embed(carrier, &mut payload).unwrap();

        for (before, after) in original.pixels().zip(embedded.pixels()) {
            for i in 0..DATA_CHANNELS {
                assert_eq!(before.0[i] & CHANNEL_CLEAR_MASK, after.0[i] & CHANNEL_CLEAR_MASK);
            }
            assert_eq!(before.0[3], after.0[3]);
        }
    }

    #[test]
    fn extract_round_trips_an_embedded_payload() {
        let carrier = solid_carrier(2, 2, 0xFF);
        let data = [0x41, 0x42];

        let mut payload = BitReader::new(data.as_slice());
        let embedded = embed(carrier, &mut payload).unwrap();

        let recovered = extract(&embedded, BitWriter::new(Vec::new())).unwrap();

        assert_eq!(recovered.len() as u64, capacity_bytes(2, 2));
        assert_eq!(&recovered[..2], &data);
        // 第三个字节来自最后一个像素未被改写的通道残余位：
        // 像素 (0,1) 的蓝色通道与像素 (1,1) 的三个通道均保持 0xFF。
        assert_eq!(recovered[2], 0xFF);
    }

    #[test]
    fn extract_always_covers_the_whole_grid() {
        let carrier = solid_carrier(5, 3, 0x7B);

        let recovered = extract(&carrier, BitWriter::new(Vec::new())).unwrap();

        assert_eq!(recovered.len() as u64, capacity_bytes(5, 3));
    }

    #[test]
    fn extract_with_empty_payload_reads_carrier_noise() {
        // 未嵌入任何数据时，提取结果就是载体通道低位的噪声。
        let carrier = solid_carrier(2, 2, 0b0000_0011);

        let recovered = extract(&carrier, BitWriter::new(Vec::new())).unwrap();

        assert_eq!(recovered, vec![0xFF, 0xFF, 0xFF]);
    }
}
