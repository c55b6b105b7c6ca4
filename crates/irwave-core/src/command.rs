//! NEC command word parsing and field access.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Number of hex digits in a command word.
const WORD_DIGITS: usize = 8;

/// A 32-bit NEC command word.
///
/// Bit layout, most significant byte first: device address, inverted
/// address, command, inverted command. Words built with [`from_parts`]
/// always carry exact complements; words parsed from hex are taken as is,
/// so extended-protocol words with a 16-bit address survive a round trip.
///
/// [`from_parts`]: CommandWord::from_parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandWord(u32);

impl CommandWord {
    /// Parses a command word from a hex string.
    ///
    /// An optional `0x` or `0X` prefix is accepted; the remainder must be
    /// exactly eight hex digits, upper or lower case.
    ///
    /// # Examples
    ///
    /// ```
    /// use irwave_core::CommandWord;
    ///
    /// let word = CommandWord::from_hex("0x20DF10EF").unwrap();
    /// assert_eq!(word.address(), 0x20);
    /// assert_eq!(word.command(), 0x10);
    /// ```
    pub fn from_hex(input: &str) -> Result<Self, FormatError> {
        let digits = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input);

        let length = digits.chars().count();
        if length != WORD_DIGITS {
            return Err(FormatError::WrongLength { length });
        }

        let mut value: u32 = 0;
        for (position, character) in digits.chars().enumerate() {
            let digit = character
                .to_digit(16)
                .ok_or(FormatError::InvalidDigit {
                    character,
                    position,
                })?;
            value = (value << 4) | digit;
        }

        Ok(Self(value))
    }

    /// Builds a command word from an address and command byte.
    ///
    /// The inverted fields are derived as bitwise complements, which is the
    /// only way the standard protocol transmits them.
    pub fn from_parts(address: u8, command: u8) -> Self {
        let value = (u32::from(address) << 24)
            | (u32::from(!address) << 16)
            | (u32::from(command) << 8)
            | u32::from(!command);
        Self(value)
    }

    /// Wraps a raw 32-bit value without any field checks.
    pub fn from_u32(value: u32) -> Self {
        Self(value)
    }

    /// The device address byte (bits 31..24).
    pub fn address(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The inverted address byte (bits 23..16).
    pub fn address_inverted(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// The command byte (bits 15..8).
    pub fn command(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// The inverted command byte (bits 7..0).
    pub fn command_inverted(&self) -> u8 {
        self.0 as u8
    }

    /// The raw 32-bit value.
    pub fn to_u32(self) -> u32 {
        self.0
    }

    /// The four payload bytes in transmission order.
    pub fn payload_bytes(&self) -> [u8; 4] {
        [
            self.address(),
            self.address_inverted(),
            self.command(),
            self.command_inverted(),
        ]
    }

    /// Whether both inverted fields are exact complements.
    ///
    /// Words that fail this check are still transmittable; extended-protocol
    /// remotes reuse the inverted address byte for a wider address space.
    pub fn is_well_formed(&self) -> bool {
        self.address() ^ self.address_inverted() == 0xFF
            && self.command() ^ self.command_inverted() == 0xFF
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl FromStr for CommandWord {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
