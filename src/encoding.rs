//! Encoding detection and byte-to-code-point decoding.
//!
//! The detection layer consumes a small prefix of the byte stream (BOMs,
//! the four-byte patterns from the XML specification, the XML declaration
//! or the first `<meta charset>`) while recording it, so the stream can be
//! "restarted from the beginning" by replaying the record; the byte source
//! itself is only ever read forward once.

use std::collections::VecDeque;

use crate::source::ByteSource;
use crate::{Error, Location};

/// A character encoding the decoding layer understands.
///
/// Pass one to the `encoding(..)` option of a parser to bypass automatic
/// detection, or obtain one from a user-supplied label with
/// [`Encoding::for_label`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Encoding {
    Utf8,
    Utf16Be,
    Utf16Le,
    Ucs4Be,
    Ucs4Le,
    /// UCS-4, unusual octet order 2143.
    Ucs4BeTransposed,
    /// UCS-4, unusual octet order 3412.
    Ucs4LeTransposed,
    Iso8859_1,
    Windows1251,
    Windows1252,
    UsAscii,
    Ebcdic37,
}

impl Encoding {
    /// The canonical name of the encoding, as used in error reports.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf16Be => "utf-16be",
            Encoding::Utf16Le => "utf-16le",
            Encoding::Ucs4Be => "ucs-4be",
            Encoding::Ucs4Le => "ucs-4le",
            Encoding::Ucs4BeTransposed => "ucs-4be-transposed",
            Encoding::Ucs4LeTransposed => "ucs-4le-transposed",
            Encoding::Iso8859_1 => "iso-8859-1",
            Encoding::Windows1251 => "windows-1251",
            Encoding::Windows1252 => "windows-1252",
            Encoding::UsAscii => "us-ascii",
            Encoding::Ebcdic37 => "ebcdic-37",
        }
    }

    /// Case-insensitive lookup of an encoding label, as found in XML
    /// declarations and `<meta charset>` attributes.
    pub fn for_label(label: &str) -> Option<Encoding> {
        let label = label.trim().to_ascii_lowercase();
        Some(match label.as_str() {
            "utf-8" | "utf8" => Encoding::Utf8,
            "utf-16" | "utf16" | "utf-16be" => Encoding::Utf16Be,
            "utf-16le" => Encoding::Utf16Le,
            "ucs-4" | "ucs4" | "utf-32" | "utf-32be" => Encoding::Ucs4Be,
            "utf-32le" => Encoding::Ucs4Le,
            "iso-8859-1" | "iso8859-1" | "iso_8859-1" | "latin1" | "latin-1" | "l1" => {
                Encoding::Iso8859_1
            }
            "windows-1251" | "cp1251" | "x-cp1251" => Encoding::Windows1251,
            "windows-1252" | "cp1252" | "x-cp1252" => Encoding::Windows1252,
            "us-ascii" | "ascii" | "ansi_x3.4-1968" => Encoding::UsAscii,
            "ebcdic" | "cp037" | "ibm037" | "ebcdic-cp-us" => Encoding::Ebcdic37,
            _ => return None,
        })
    }
}

// Single-byte decode tables, generated with Python 3 from the codecs
// shipped with CPython:
//   [bytes([b]).decode(cp) for b in range(lo, hi)]
// Undefined windows-1252 positions fall back to the C1 control.

static WINDOWS_1252_C1: [char; 32] = [
    '\u{20ac}', '\u{81}', '\u{201a}', '\u{192}', '\u{201e}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{2c6}', '\u{2030}', '\u{160}', '\u{2039}', '\u{152}', '\u{8d}', '\u{17d}', '\u{8f}',
    '\u{90}', '\u{2018}', '\u{2019}', '\u{201c}', '\u{201d}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{2dc}', '\u{2122}', '\u{161}', '\u{203a}', '\u{153}', '\u{9d}', '\u{17e}', '\u{178}',
];

static WINDOWS_1251_HIGH: [char; 128] = [
    '\u{402}', '\u{403}', '\u{201a}', '\u{453}', '\u{201e}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{20ac}', '\u{2030}', '\u{409}', '\u{2039}', '\u{40a}', '\u{40c}', '\u{40b}', '\u{40f}',
    '\u{452}', '\u{2018}', '\u{2019}', '\u{201c}', '\u{201d}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{98}', '\u{2122}', '\u{459}', '\u{203a}', '\u{45a}', '\u{45c}', '\u{45b}', '\u{45f}',
    '\u{a0}', '\u{40e}', '\u{45e}', '\u{408}', '\u{a4}', '\u{490}', '\u{a6}', '\u{a7}',
    '\u{401}', '\u{a9}', '\u{404}', '\u{ab}', '\u{ac}', '\u{ad}', '\u{ae}', '\u{407}',
    '\u{b0}', '\u{b1}', '\u{406}', '\u{456}', '\u{491}', '\u{b5}', '\u{b6}', '\u{b7}',
    '\u{451}', '\u{2116}', '\u{454}', '\u{bb}', '\u{458}', '\u{405}', '\u{455}', '\u{457}',
    '\u{410}', '\u{411}', '\u{412}', '\u{413}', '\u{414}', '\u{415}', '\u{416}', '\u{417}',
    '\u{418}', '\u{419}', '\u{41a}', '\u{41b}', '\u{41c}', '\u{41d}', '\u{41e}', '\u{41f}',
    '\u{420}', '\u{421}', '\u{422}', '\u{423}', '\u{424}', '\u{425}', '\u{426}', '\u{427}',
    '\u{428}', '\u{429}', '\u{42a}', '\u{42b}', '\u{42c}', '\u{42d}', '\u{42e}', '\u{42f}',
    '\u{430}', '\u{431}', '\u{432}', '\u{433}', '\u{434}', '\u{435}', '\u{436}', '\u{437}',
    '\u{438}', '\u{439}', '\u{43a}', '\u{43b}', '\u{43c}', '\u{43d}', '\u{43e}', '\u{43f}',
    '\u{440}', '\u{441}', '\u{442}', '\u{443}', '\u{444}', '\u{445}', '\u{446}', '\u{447}',
    '\u{448}', '\u{449}', '\u{44a}', '\u{44b}', '\u{44c}', '\u{44d}', '\u{44e}', '\u{44f}',
];

static EBCDIC_37: [char; 256] = [
    '\u{0}', '\u{1}', '\u{2}', '\u{3}', '\u{9c}', '\u{9}', '\u{86}', '\u{7f}',
    '\u{97}', '\u{8d}', '\u{8e}', '\u{b}', '\u{c}', '\u{d}', '\u{e}', '\u{f}',
    '\u{10}', '\u{11}', '\u{12}', '\u{13}', '\u{9d}', '\u{85}', '\u{8}', '\u{87}',
    '\u{18}', '\u{19}', '\u{92}', '\u{8f}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{1f}',
    '\u{80}', '\u{81}', '\u{82}', '\u{83}', '\u{84}', '\u{a}', '\u{17}', '\u{1b}',
    '\u{88}', '\u{89}', '\u{8a}', '\u{8b}', '\u{8c}', '\u{5}', '\u{6}', '\u{7}',
    '\u{90}', '\u{91}', '\u{16}', '\u{93}', '\u{94}', '\u{95}', '\u{96}', '\u{4}',
    '\u{98}', '\u{99}', '\u{9a}', '\u{9b}', '\u{14}', '\u{15}', '\u{9e}', '\u{1a}',
    '\u{20}', '\u{a0}', '\u{e2}', '\u{e4}', '\u{e0}', '\u{e1}', '\u{e3}', '\u{e5}',
    '\u{e7}', '\u{f1}', '\u{a2}', '\u{2e}', '\u{3c}', '\u{28}', '\u{2b}', '\u{7c}',
    '\u{26}', '\u{e9}', '\u{ea}', '\u{eb}', '\u{e8}', '\u{ed}', '\u{ee}', '\u{ef}',
    '\u{ec}', '\u{df}', '\u{21}', '\u{24}', '\u{2a}', '\u{29}', '\u{3b}', '\u{ac}',
    '\u{2d}', '\u{2f}', '\u{c2}', '\u{c4}', '\u{c0}', '\u{c1}', '\u{c3}', '\u{c5}',
    '\u{c7}', '\u{d1}', '\u{a6}', '\u{2c}', '\u{25}', '\u{5f}', '\u{3e}', '\u{3f}',
    '\u{f8}', '\u{c9}', '\u{ca}', '\u{cb}', '\u{c8}', '\u{cd}', '\u{ce}', '\u{cf}',
    '\u{cc}', '\u{60}', '\u{3a}', '\u{23}', '\u{40}', '\u{27}', '\u{3d}', '\u{22}',
    '\u{d8}', '\u{61}', '\u{62}', '\u{63}', '\u{64}', '\u{65}', '\u{66}', '\u{67}',
    '\u{68}', '\u{69}', '\u{ab}', '\u{bb}', '\u{f0}', '\u{fd}', '\u{fe}', '\u{b1}',
    '\u{b0}', '\u{6a}', '\u{6b}', '\u{6c}', '\u{6d}', '\u{6e}', '\u{6f}', '\u{70}',
    '\u{71}', '\u{72}', '\u{aa}', '\u{ba}', '\u{e6}', '\u{b8}', '\u{c6}', '\u{a4}',
    '\u{b5}', '\u{7e}', '\u{73}', '\u{74}', '\u{75}', '\u{76}', '\u{77}', '\u{78}',
    '\u{79}', '\u{7a}', '\u{a1}', '\u{bf}', '\u{d0}', '\u{dd}', '\u{de}', '\u{ae}',
    '\u{5e}', '\u{a3}', '\u{a5}', '\u{b7}', '\u{a9}', '\u{a7}', '\u{b6}', '\u{bc}',
    '\u{bd}', '\u{be}', '\u{5b}', '\u{5d}', '\u{af}', '\u{a8}', '\u{b4}', '\u{d7}',
    '\u{7b}', '\u{41}', '\u{42}', '\u{43}', '\u{44}', '\u{45}', '\u{46}', '\u{47}',
    '\u{48}', '\u{49}', '\u{ad}', '\u{f4}', '\u{f6}', '\u{f2}', '\u{f3}', '\u{f5}',
    '\u{7d}', '\u{4a}', '\u{4b}', '\u{4c}', '\u{4d}', '\u{4e}', '\u{4f}', '\u{50}',
    '\u{51}', '\u{52}', '\u{b9}', '\u{fb}', '\u{fc}', '\u{f9}', '\u{fa}', '\u{ff}',
    '\u{5c}', '\u{f7}', '\u{53}', '\u{54}', '\u{55}', '\u{56}', '\u{57}', '\u{58}',
    '\u{59}', '\u{5a}', '\u{b2}', '\u{d4}', '\u{d6}', '\u{d2}', '\u{d3}', '\u{d5}',
    '\u{30}', '\u{31}', '\u{32}', '\u{33}', '\u{34}', '\u{35}', '\u{36}', '\u{37}',
    '\u{38}', '\u{39}', '\u{b3}', '\u{db}', '\u{dc}', '\u{d9}', '\u{da}', '\u{9f}',
];

/// A byte source that records what it hands out until detection commits,
/// so the stream can be replayed from the beginning.
#[derive(Debug)]
struct Replay<S: ByteSource> {
    source: S,
    buffer: Vec<u8>,
    pos: usize,
    recording: bool,
}

impl<S: ByteSource> Replay<S> {
    fn new(source: S, recording: bool) -> Self {
        Replay {
            source,
            buffer: Vec::new(),
            pos: 0,
            recording,
        }
    }

    fn read(&mut self) -> Result<Option<u8>, S::Error> {
        if self.pos < self.buffer.len() {
            let b = self.buffer[self.pos];
            self.pos += 1;
            return Ok(Some(b));
        }
        if !self.recording && !self.buffer.is_empty() {
            self.buffer.clear();
            self.pos = 0;
        }
        match self.source.read_byte()? {
            Some(b) => {
                if self.recording {
                    self.buffer.push(b);
                    self.pos = self.buffer.len();
                }
                Ok(Some(b))
            }
            None => Ok(None),
        }
    }

    /// Rewind to the first recorded byte.
    fn restart(&mut self) {
        self.pos = 0;
    }

    /// Detection is over; stop recording. Already-recorded bytes are still
    /// replayed before the source is read again.
    fn commit(&mut self) {
        self.recording = false;
    }
}

/// Decodes a recorded byte stream into Unicode scalar values, reporting
/// and recovering from illegal sequences.
#[derive(Debug)]
pub(crate) struct Decoder<S: ByteSource> {
    encoding: Encoding,
    input: Replay<S>,
    /// Raw bytes pushed back for reprocessing after an illegal sequence,
    /// most recent last.
    held: Vec<(u8, Location)>,
    byte_location: Location,
    pending: VecDeque<(Location, Error)>,
    at_start: bool,
}

impl<S: ByteSource> Decoder<S> {
    fn new(encoding: Encoding, input: Replay<S>) -> Self {
        Decoder {
            encoding,
            input,
            held: Vec::new(),
            byte_location: Location::START,
            pending: VecDeque::new(),
            at_start: true,
        }
    }

    fn into_input(self) -> Replay<S> {
        self.input
    }

    pub(crate) fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Locations for decoding errors are positions in the *byte* stream:
    /// accurate to the line whenever the input uses LF line endings.
    fn read_raw(&mut self) -> Result<Option<(u8, Location)>, S::Error> {
        if let Some(held) = self.held.pop() {
            return Ok(Some(held));
        }
        match self.input.read()? {
            Some(b) => {
                let loc = self.byte_location;
                self.byte_location
                    .advance(if b == b'\n' { '\n' } else { '\0' });
                Ok(Some((b, loc)))
            }
            None => Ok(None),
        }
    }

    fn error(&mut self, location: Location, bytes: Vec<u8>) -> Option<char> {
        self.pending.push_back((
            location,
            Error::Decoding {
                bytes,
                encoding: self.encoding.name(),
            },
        ));
        Some('\u{fffd}')
    }

    pub(crate) fn take_report(&mut self) -> Option<(Location, Error)> {
        self.pending.pop_front()
    }

    pub(crate) fn next_char(&mut self) -> Result<Option<char>, S::Error> {
        let c = match self.encoding {
            Encoding::Utf8 => self.next_utf8()?,
            Encoding::Utf16Be => self.next_utf16(true)?,
            Encoding::Utf16Le => self.next_utf16(false)?,
            Encoding::Ucs4Be
            | Encoding::Ucs4Le
            | Encoding::Ucs4BeTransposed
            | Encoding::Ucs4LeTransposed => self.next_ucs4()?,
            Encoding::Iso8859_1
            | Encoding::Windows1251
            | Encoding::Windows1252
            | Encoding::UsAscii
            | Encoding::Ebcdic37 => self.next_single_byte()?,
        };
        if self.at_start {
            self.at_start = false;
            // a leading U+FEFF is a byte order mark, not content
            if c == Some('\u{feff}') {
                return self.next_char();
            }
        }
        Ok(c)
    }

    fn next_utf8(&mut self) -> Result<Option<char>, S::Error> {
        let (b0, loc) = match self.read_raw()? {
            Some(x) => x,
            None => return Ok(None),
        };
        if b0 < 0x80 {
            return Ok(Some(b0 as char));
        }
        // continuation count and bounds for the first continuation byte,
        // per the table in the Unicode standard (rejects overlong forms
        // and surrogates at the earliest byte)
        let (count, lo, hi) = match b0 {
            0xc2..=0xdf => (1, 0x80, 0xbf),
            0xe0 => (2, 0xa0, 0xbf),
            0xe1..=0xec | 0xee..=0xef => (2, 0x80, 0xbf),
            0xed => (2, 0x80, 0x9f),
            0xf0 => (3, 0x90, 0xbf),
            0xf1..=0xf3 => (3, 0x80, 0xbf),
            0xf4 => (3, 0x80, 0x8f),
            _ => return Ok(self.error(loc, vec![b0])),
        };
        let mut cp = u32::from(b0 & (0x7f >> (count + 1)));
        let mut seen = vec![b0];
        for i in 0..count {
            let (first_lo, first_hi) = if i == 0 { (lo, hi) } else { (0x80, 0xbf) };
            match self.read_raw()? {
                Some((b, _)) if (first_lo..=first_hi).contains(&b) => {
                    cp = (cp << 6) | u32::from(b & 0x3f);
                    seen.push(b);
                }
                Some(other) => {
                    // skip the minimal illegal prefix; the offending byte
                    // starts a fresh sequence
                    self.held.push(other);
                    return Ok(self.error(loc, seen));
                }
                None => return Ok(self.error(loc, seen)),
            }
        }
        Ok(char::from_u32(cp))
    }

    fn next_utf16(&mut self, big_endian: bool) -> Result<Option<char>, S::Error> {
        let unit = |b0: u8, b1: u8| {
            if big_endian {
                u16::from_be_bytes([b0, b1])
            } else {
                u16::from_le_bytes([b0, b1])
            }
        };
        let (b0, loc) = match self.read_raw()? {
            Some(x) => x,
            None => return Ok(None),
        };
        let (b1, _) = match self.read_raw()? {
            Some(x) => x,
            None => return Ok(self.error(loc, vec![b0])),
        };
        let u = unit(b0, b1);
        match u {
            0xd800..=0xdbff => {
                let (b2, l2) = match self.read_raw()? {
                    Some(x) => x,
                    None => return Ok(self.error(loc, vec![b0, b1])),
                };
                let (b3, l3) = match self.read_raw()? {
                    Some(x) => x,
                    None => {
                        self.held.push((b2, l2));
                        return Ok(self.error(loc, vec![b0, b1]));
                    }
                };
                let u2 = unit(b2, b3);
                if (0xdc00..=0xdfff).contains(&u2) {
                    let cp = 0x10000 + ((u32::from(u) - 0xd800) << 10) + (u32::from(u2) - 0xdc00);
                    Ok(char::from_u32(cp))
                } else {
                    // unpaired high surrogate; reprocess the second unit
                    self.held.push((b3, l3));
                    self.held.push((b2, l2));
                    Ok(self.error(loc, vec![b0, b1]))
                }
            }
            0xdc00..=0xdfff => Ok(self.error(loc, vec![b0, b1])),
            _ => Ok(char::from_u32(u32::from(u))),
        }
    }

    fn next_ucs4(&mut self) -> Result<Option<char>, S::Error> {
        let (b0, loc) = match self.read_raw()? {
            Some(x) => x,
            None => return Ok(None),
        };
        let mut bytes = vec![b0];
        for _ in 0..3 {
            match self.read_raw()? {
                Some((b, _)) => bytes.push(b),
                None => return Ok(self.error(loc, bytes)),
            }
        }
        let b = [bytes[0], bytes[1], bytes[2], bytes[3]];
        let cp = match self.encoding {
            Encoding::Ucs4Be => u32::from_be_bytes(b),
            Encoding::Ucs4Le => u32::from_le_bytes(b),
            Encoding::Ucs4BeTransposed => u32::from_be_bytes([b[1], b[0], b[3], b[2]]),
            Encoding::Ucs4LeTransposed => u32::from_be_bytes([b[2], b[3], b[0], b[1]]),
            _ => unreachable!(),
        };
        match char::from_u32(cp) {
            Some(c) => Ok(Some(c)),
            None => Ok(self.error(loc, bytes)),
        }
    }

    fn next_single_byte(&mut self) -> Result<Option<char>, S::Error> {
        let (b, loc) = match self.read_raw()? {
            Some(x) => x,
            None => return Ok(None),
        };
        let c = match self.encoding {
            Encoding::Iso8859_1 => char::from(b),
            Encoding::Windows1252 => match b {
                0x80..=0x9f => WINDOWS_1252_C1[usize::from(b - 0x80)],
                _ => char::from(b),
            },
            Encoding::Windows1251 => match b {
                0x80..=0xff => WINDOWS_1251_HIGH[usize::from(b - 0x80)],
                _ => char::from(b),
            },
            Encoding::UsAscii => {
                if b < 0x80 {
                    char::from(b)
                } else {
                    return Ok(self.error(loc, vec![b]));
                }
            }
            Encoding::Ebcdic37 => EBCDIC_37[usize::from(b)],
            _ => unreachable!(),
        };
        Ok(Some(c))
    }
}

/// Which sniffing rules apply when no encoding is given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Dialect {
    Xml,
    Html,
}

/// Run encoding detection (unless `explicit` is given) and return a
/// decoder positioned at the first byte of the input.
pub(crate) fn decoder_for<S: ByteSource>(
    source: S,
    explicit: Option<Encoding>,
    dialect: Dialect,
) -> Result<Decoder<S>, S::Error> {
    if let Some(encoding) = explicit {
        return Ok(Decoder::new(encoding, Replay::new(source, false)));
    }

    let mut input = Replay::new(source, true);
    let mut head = [0u8; 4];
    let mut n = 0;
    while n < 4 {
        match input.read()? {
            Some(b) => {
                head[n] = b;
                n += 1;
            }
            None => break,
        }
    }

    // byte order marks; the four-byte ones shadow the UTF-16 ones
    let bom = match head[..n] {
        [0x00, 0x00, 0xfe, 0xff] => Some((Encoding::Ucs4Be, 4)),
        [0xff, 0xfe, 0x00, 0x00] => Some((Encoding::Ucs4Le, 4)),
        [0x00, 0x00, 0xff, 0xfe] => Some((Encoding::Ucs4BeTransposed, 4)),
        [0xfe, 0xff, 0x00, 0x00] => Some((Encoding::Ucs4LeTransposed, 4)),
        [0xef, 0xbb, 0xbf, ..] => Some((Encoding::Utf8, 3)),
        [0xfe, 0xff, ..] => Some((Encoding::Utf16Be, 2)),
        [0xff, 0xfe, ..] => Some((Encoding::Utf16Le, 2)),
        _ => None,
    };
    if let Some((encoding, skip)) = bom {
        input.restart();
        for _ in 0..skip {
            input.read()?;
        }
        input.commit();
        return Ok(Decoder::new(encoding, input));
    }

    // no BOM: the four-byte patterns from Appendix F of the XML
    // specification give a tentative decoder for reading the declaration
    let tentative = match head[..n] {
        [0x00, 0x00, 0x00, 0x3c] => Encoding::Ucs4Be,
        [0x3c, 0x00, 0x00, 0x00] => Encoding::Ucs4Le,
        [0x00, 0x3c, 0x00, 0x3f] => Encoding::Utf16Be,
        [0x3c, 0x00, 0x3f, 0x00] => Encoding::Utf16Le,
        [0x3c, 0x3f, 0x78, 0x6d] => Encoding::Utf8,
        [0x4c, 0x6f, 0xa7, 0x94] => Encoding::Ebcdic37,
        _ => match dialect {
            Dialect::Xml => Encoding::Utf8,
            Dialect::Html => Encoding::Windows1252,
        },
    };
    input.restart();

    let (encoding, mut input) = match dialect {
        Dialect::Xml => {
            let mut probe = Decoder::new(tentative, input);
            let label = read_declaration_label(&mut probe)?;
            let input = probe.into_input();
            let declared = label.as_deref().and_then(Encoding::for_label);
            (declared.unwrap_or(tentative), input)
        }
        Dialect::Html => {
            let mut prefix = Vec::with_capacity(1024);
            while prefix.len() < 1024 {
                match input.read()? {
                    Some(b) => prefix.push(b),
                    None => break,
                }
            }
            let sniffed = prescan_meta_charset(&prefix);
            (sniffed.unwrap_or(tentative), input)
        }
    };
    input.restart();
    input.commit();
    Ok(Decoder::new(encoding, input))
}

/// Read a leading `<?xml ...?>` declaration with the tentative decoder and
/// extract its `encoding` pseudo-attribute, if any.
fn read_declaration_label<S: ByteSource>(
    probe: &mut Decoder<S>,
) -> Result<Option<String>, S::Error> {
    let mut text = String::new();
    while text.len() < 512 {
        match probe.next_char()? {
            Some(c) => {
                text.push(c);
                if c == '>' {
                    break;
                }
            }
            None => break,
        }
    }
    if !text.starts_with("<?xml") {
        return Ok(None);
    }
    let rest = match text.find("encoding") {
        Some(i) => &text[i + "encoding".len()..],
        None => return Ok(None),
    };
    let rest = rest.trim_start();
    let rest = match rest.strip_prefix('=') {
        Some(r) => r.trim_start(),
        None => return Ok(None),
    };
    let quote = match rest.chars().next() {
        Some(q @ ('"' | '\'')) => q,
        _ => return Ok(None),
    };
    let value = &rest[1..];
    Ok(value.find(quote).map(|end| value[..end].to_owned()))
}

/// Scan the first bytes of an HTML document for a `charset` declaration,
/// covering both `<meta charset=...>` and the `content="...; charset=..."`
/// form of `<meta http-equiv>`.
fn prescan_meta_charset(prefix: &[u8]) -> Option<Encoding> {
    let lower: Vec<u8> = prefix.iter().map(u8::to_ascii_lowercase).collect();
    let mut at = 0;
    while let Some(i) = find(&lower[at..], b"charset") {
        let mut j = at + i + b"charset".len();
        at = j;
        while lower.get(j).is_some_and(u8::is_ascii_whitespace) {
            j += 1;
        }
        if lower.get(j) != Some(&b'=') {
            continue;
        }
        j += 1;
        while lower.get(j).is_some_and(u8::is_ascii_whitespace) {
            j += 1;
        }
        let quote = match lower.get(j) {
            Some(q @ (b'"' | b'\'')) => {
                j += 1;
                Some(*q)
            }
            _ => None,
        };
        let start = j;
        while let Some(&b) = lower.get(j) {
            let done = match quote {
                Some(q) => b == q,
                None => b.is_ascii_whitespace() || b == b'>' || b == b';' || b == b'/',
            };
            if done {
                break;
            }
            j += 1;
        }
        let label = std::str::from_utf8(&lower[start..j]).ok()?;
        if let Some(encoding) = Encoding::for_label(label) {
            return Some(encoding);
        }
    }
    None
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// The located code-point stream both tokenizers read: decodes, normalizes
/// newlines (CRLF and bare CR become U+000A), assigns locations, and
/// supports bounded push-back and speculative string matching.
#[derive(Debug)]
pub(crate) struct CodePoints<S: ByteSource> {
    decoder: Decoder<S>,
    next_location: Location,
    pushback: Vec<(Location, char)>,
    last_was_cr: bool,
}

impl<S: ByteSource> CodePoints<S> {
    pub(crate) fn new(decoder: Decoder<S>) -> Self {
        CodePoints {
            decoder,
            next_location: Location::START,
            pushback: Vec::new(),
            last_was_cr: false,
        }
    }

    pub(crate) fn read(&mut self) -> Result<Option<(Location, char)>, S::Error> {
        if let Some(item) = self.pushback.pop() {
            return Ok(Some(item));
        }
        loop {
            let c = match self.decoder.next_char()? {
                Some(c) => c,
                None => return Ok(None),
            };
            if self.last_was_cr && c == '\n' {
                self.last_was_cr = false;
                continue;
            }
            self.last_was_cr = c == '\r';
            let c = if c == '\r' { '\n' } else { c };
            let location = self.next_location;
            self.next_location.advance(c);
            return Ok(Some((location, c)));
        }
    }

    pub(crate) fn unread(&mut self, item: (Location, char)) {
        self.pushback.push(item);
    }

    /// The location of the next code point (or of end of input).
    pub(crate) fn location(&self) -> Location {
        match self.pushback.last() {
            Some((location, _)) => *location,
            None => self.next_location,
        }
    }

    /// Consume `needle` from the head of the stream if it is there; on a
    /// non-match consume nothing. Needles are ASCII.
    pub(crate) fn try_read(
        &mut self,
        needle: &str,
        case_insensitive: bool,
    ) -> Result<bool, S::Error> {
        let mut taken = Vec::with_capacity(needle.len());
        for expected in needle.chars() {
            match self.read()? {
                Some((loc, c))
                    if c == expected || (case_insensitive && c.eq_ignore_ascii_case(&expected)) =>
                {
                    taken.push((loc, c));
                }
                mismatch => {
                    if let Some(item) = mismatch {
                        self.pushback.push(item);
                    }
                    while let Some(item) = taken.pop() {
                        self.pushback.push(item);
                    }
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    pub(crate) fn take_report(&mut self) -> Option<(Location, Error)> {
        self.decoder.take_report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codepoints(bytes: &[u8], explicit: Option<Encoding>, dialect: Dialect) -> Vec<char> {
        let decoder = decoder_for(crate::source::SliceSource::new(bytes), explicit, dialect)
            .expect("slice sources are infallible");
        let mut cps = CodePoints::new(decoder);
        let mut out = Vec::new();
        while let Some((_, c)) = cps.read().unwrap() {
            out.push(c);
        }
        out
    }

    #[test]
    fn utf8_bom_is_detected_and_skipped() {
        let out = codepoints(b"\xef\xbb\xbfhi", None, Dialect::Xml);
        assert_eq!(out, vec!['h', 'i']);
    }

    #[test]
    fn utf16le_bom() {
        let out = codepoints(b"\xff\xfeh\x00i\x00", None, Dialect::Xml);
        assert_eq!(out, vec!['h', 'i']);
    }

    #[test]
    fn declaration_switches_the_decoder() {
        let mut bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><r>".to_vec();
        bytes.push(0xe9);
        bytes.extend_from_slice(b"</r>");
        let decoder = decoder_for(crate::source::SliceSource::new(&bytes), None, Dialect::Xml)
            .expect("infallible");
        assert_eq!(decoder.encoding(), Encoding::Iso8859_1);
        let mut cps = CodePoints::new(decoder);
        let mut out = String::new();
        while let Some((_, c)) = cps.read().unwrap() {
            out.push(c);
        }
        assert!(out.contains('\u{e9}'));
        assert!(cps.take_report().is_none());
    }

    #[test]
    fn meta_charset_is_sniffed() {
        let bytes = b"<html><head><meta charset=\"windows-1251\"></head><body>\xe0</body>";
        let out = codepoints(bytes, None, Dialect::Html);
        assert!(out.contains(&'\u{430}')); // CYRILLIC SMALL LETTER A
    }

    #[test]
    fn html_defaults_to_windows_1252() {
        let out = codepoints(b"<p>\x93x\x94</p>", None, Dialect::Html);
        assert!(out.contains(&'\u{201c}'));
        assert!(out.contains(&'\u{201d}'));
    }

    #[test]
    fn illegal_utf8_reports_and_replaces() {
        let decoder = decoder_for(
            crate::source::SliceSource::new(b"a\xc3\x28b"),
            Some(Encoding::Utf8),
            Dialect::Xml,
        )
        .expect("infallible");
        let mut cps = CodePoints::new(decoder);
        let mut out = String::new();
        while let Some((_, c)) = cps.read().unwrap() {
            out.push(c);
        }
        // the continuation byte is reprocessed as a fresh (valid) character
        assert_eq!(out, "a\u{fffd}(b");
        let (location, error) = cps.take_report().expect("a decoding error");
        assert_eq!(location, Location { line: 1, column: 2 });
        assert_eq!(
            error,
            Error::Decoding {
                bytes: vec![0xc3],
                encoding: "utf-8"
            }
        );
    }

    #[test]
    fn utf16_surrogate_pairs_decode() {
        // U+1F600 as UTF-16BE, no BOM
        let out = codepoints(b"\x00a\xd8\x3d\xde\x00", Some(Encoding::Utf16Be), Dialect::Xml);
        assert_eq!(out, vec!['a', '\u{1f600}']);
    }

    #[test]
    fn unpaired_surrogate_reports_and_reprocesses() {
        let decoder = decoder_for(
            crate::source::SliceSource::new(b"\xd8\x3d\x00a"),
            Some(Encoding::Utf16Be),
            Dialect::Xml,
        )
        .expect("infallible");
        let mut cps = CodePoints::new(decoder);
        let mut out = Vec::new();
        while let Some((_, c)) = cps.read().unwrap() {
            out.push(c);
        }
        assert_eq!(out, vec!['\u{fffd}', 'a']);
        assert!(matches!(
            cps.take_report(),
            Some((_, Error::Decoding { .. }))
        ));
    }

    #[test]
    fn crlf_normalizes_to_lf_with_one_location() {
        let decoder = decoder_for(
            crate::source::SliceSource::new(b"a\r\nb\rc"),
            Some(Encoding::Utf8),
            Dialect::Xml,
        )
        .expect("infallible");
        let mut cps = CodePoints::new(decoder);
        let mut out = Vec::new();
        while let Some(item) = cps.read().unwrap() {
            out.push(item);
        }
        let chars: String = out.iter().map(|&(_, c)| c).collect();
        assert_eq!(chars, "a\nb\nc");
        assert_eq!(out[2].0, Location { line: 2, column: 1 });
        assert_eq!(out[4].0, Location { line: 3, column: 1 });
    }

    #[test]
    fn try_read_consumes_nothing_on_mismatch() {
        let decoder = decoder_for(
            crate::source::SliceSource::new(b"DOCTYPE"),
            Some(Encoding::Utf8),
            Dialect::Xml,
        )
        .expect("infallible");
        let mut cps = CodePoints::new(decoder);
        assert!(!cps.try_read("DOCTYPO", false).unwrap());
        assert!(cps.try_read("doctype", true).unwrap());
        assert_eq!(cps.read().unwrap(), None);
    }

    #[test]
    fn ebcdic_pattern_is_recognized() {
        // "<?xml" in EBCDIC-37 begins 4C 6F A7 94
        let bytes = b"\x4c\x6f\xa7\x94\x93";
        let decoder = decoder_for(crate::source::SliceSource::new(bytes), None, Dialect::Xml)
            .expect("infallible");
        assert_eq!(decoder.encoding(), Encoding::Ebcdic37);
        let mut cps = CodePoints::new(decoder);
        let mut out = String::new();
        while let Some((_, c)) = cps.read().unwrap() {
            out.push(c);
        }
        assert_eq!(out, "<?xml");
    }
}
