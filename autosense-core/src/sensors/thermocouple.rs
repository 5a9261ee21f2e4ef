//! SPI thermocouple amplifiers
//!
//! Both parts are read-only SPI slaves clocked by a chip-select pulse:
//!
//! ```text
//! MAX6675   16 bits  D15 dummy | D14..D3 temp (0.25 °C) | D2 open | D1..D0
//! MAX31855  32 bits  D31..D18 temp (signed, 0.25 °C) | … | D2..D0 fault bits
//! ```

use crate::errors::{Fault, MeasureResult};
use crate::hal::{DigitalIo, PinMode, SpiBus};

const DEGREES_PER_LSB: f32 = 0.25;

/// Chip select as an idle-high output
pub fn init_chip_select<D: DigitalIo>(cs: u8, io: &mut D) {
    io.set_pin_mode(cs, PinMode::Output);
    io.write_digital(cs, true);
}

fn frame<B: DigitalIo + SpiBus, const N: usize>(cs: u8, board: &mut B) -> [u8; N] {
    let mut buf = [0u8; N];
    board.write_digital(cs, false);
    board.transfer(&mut buf);
    board.write_digital(cs, true);
    buf
}

/// Read a MAX6675
pub fn read_max6675<B: DigitalIo + SpiBus>(cs: u8, board: &mut B) -> MeasureResult {
    let word = u16::from_be_bytes(frame::<B, 2>(cs, board));
    decode_max6675(word)
}

/// Read a MAX31855
pub fn read_max31855<B: DigitalIo + SpiBus>(cs: u8, board: &mut B) -> MeasureResult {
    let word = u32::from_be_bytes(frame::<B, 4>(cs, board));
    decode_max31855(word)
}

/// Temperature from a MAX6675 frame
pub fn decode_max6675(word: u16) -> MeasureResult {
    if word & 0x0004 != 0 {
        return Err(Fault::DeviceAbsent { reason: "thermocouple open" });
    }
    Ok((word >> 3) as f32 * DEGREES_PER_LSB)
}

/// Thermocouple temperature from a MAX31855 frame
pub fn decode_max31855(word: u32) -> MeasureResult {
    if word & 0x0000_0007 != 0 {
        return Err(Fault::DeviceAbsent { reason: "thermocouple fault" });
    }
    let bits = ((word >> 18) & 0x3FFF) as u16;
    let raw = if word & 0x8000_0000 != 0 {
        (bits | 0xC000) as i16
    } else {
        bits as i16
    };
    Ok(raw as f32 * DEGREES_PER_LSB)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::MockBoard;

    #[test]
    fn max6675_scales_quarter_degrees() {
        // 100 °C = 400 counts in D14..D3
        assert_eq!(decode_max6675(400 << 3), Ok(100.0));
    }

    #[test]
    fn max6675_open_circuit() {
        assert!(decode_max6675((400 << 3) | 0x4).is_err());
    }

    #[test]
    fn max31855_positive_and_negative() {
        assert_eq!(decode_max31855(100 << 18), Ok(25.0));
        // -25 °C = -100 counts, 14-bit two's complement
        let neg = ((-100i32 as u32) & 0x3FFF) << 18;
        assert_eq!(decode_max31855(neg), Ok(-25.0));
    }

    #[test]
    fn max31855_fault_bits() {
        for bit in [1u32, 2, 4] {
            assert!(decode_max31855((100 << 18) | bit).is_err());
        }
    }

    #[test]
    fn chip_select_idles_high_and_frames_transfer() {
        let mut board = MockBoard::new();
        init_chip_select(9, &mut board);
        assert_eq!(board.pin_mode(9), Some(PinMode::Output));
        assert!(board.digital_level(9));

        board.set_spi_word16(800 << 3);
        assert_eq!(read_max6675(9, &mut board), Ok(200.0));
        assert_eq!(board.spi_transfers, 1);
        assert!(board.digital_level(9));
    }
}
