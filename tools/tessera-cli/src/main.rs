use clap::{Parser, Subcommand, ValueEnum};

use tessera::codec::bits::{bits_to_byte, byte_to_bits};
use tessera::codec::encoding::Encoding;
use tessera::codec::endian::Endian;
use tessera::codec::field::{Field, TextField};
use tessera::codec::read;
use tessera::codec::write;

/// Command line front end for the Tessera raw byte codec.
#[derive(Parser)]
#[command(name = "tessera-cli", version, about = "Inspect and edit raw byte buffers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a typed value at an offset of a hex buffer.
    Read {
        /// Buffer contents as hex.
        buffer: String,
        /// Value kind to decode.
        #[arg(long, value_enum)]
        kind: Kind,
        /// Byte offset of the value.
        #[arg(long, default_value_t = 0)]
        position: usize,
        /// Byte order of the value.
        #[arg(long, value_enum, default_value = "big")]
        order: Order,
        /// Byte count for text reads; omitted means "to the end".
        #[arg(long)]
        length: Option<usize>,
        /// Encoding label for text reads.
        #[arg(long, default_value = "UTF-8")]
        encoding: String,
    },
    /// Encode a typed value into a hex buffer and print the result.
    Write {
        /// Value to encode: true/false, a decimal integer, or text.
        value: String,
        /// Existing buffer contents as hex.
        #[arg(long, required_unless_present = "capacity", conflicts_with = "capacity")]
        buffer: Option<String>,
        /// Start from a zeroed buffer of this many bytes instead.
        #[arg(long)]
        capacity: Option<usize>,
        /// Value kind to encode.
        #[arg(long, value_enum)]
        kind: Kind,
        /// Byte offset of the value.
        #[arg(long, default_value_t = 0)]
        position: usize,
        /// Byte order of the value.
        #[arg(long, value_enum, default_value = "big")]
        order: Order,
        /// Encoding label for text writes.
        #[arg(long, default_value = "UTF-8")]
        encoding: String,
    },
    /// Pack and unpack flag bytes.
    #[command(subcommand)]
    Bits(Bits),
    /// Render a digest result buffer as a fixed-width hex string.
    Checksum {
        /// Result buffer as hex; the first eight bytes hold a little-endian
        /// integer.
        buffer: String,
    },
}

#[derive(Subcommand)]
enum Bits {
    /// Pack eight 0/1 flags into one byte, first flag least significant.
    Pack {
        /// Flags as eight characters, e.g. 10100000.
        flags: String,
    },
    /// Unpack a byte into eight 0/1 flags, first flag least significant.
    Unpack {
        /// Byte value, decimal.
        byte: u8,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Bool,
    I16,
    I32,
    I64,
    Text,
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    Big,
    Little,
}

impl From<Order> for Endian {
    fn from(order: Order) -> Endian {
        match order {
            Order::Big => Endian::Big,
            Order::Little => Endian::Little,
        }
    }
}

type CliError = Box<dyn std::error::Error>;

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Read {
            buffer,
            kind,
            position,
            order,
            length,
            encoding,
        } => {
            let buf = hex::decode(buffer)?;
            let field = Field::new(position, order.into());
            match kind {
                Kind::Bool => println!("{}", read::read_bool(&buf, field)?),
                Kind::I16 => println!("{}", read::read_i16(&buf, field)?),
                Kind::I32 => println!("{}", read::read_i32(&buf, field)?),
                Kind::I64 => println!("{}", read::read_i64(&buf, field)?),
                Kind::Text => {
                    let mut text_field = TextField::at(position)
                        .with_encoding(Encoding::for_label(&encoding)?)
                        .with_order(order.into());
                    if let Some(length) = length {
                        text_field = text_field.with_length(length);
                    }
                    println!("{}", read::read_text(&buf, &text_field)?);
                }
            }
        }
        Command::Write {
            value,
            buffer,
            capacity,
            kind,
            position,
            order,
            encoding,
        } => {
            let mut buf = if let Some(hex_buf) = buffer {
                hex::decode(hex_buf)?
            } else {
                vec![0u8; capacity.unwrap_or_default()]
            };
            let field = Field::new(position, order.into());
            match kind {
                Kind::Bool => write::write_bool(&mut buf, field, value.parse()?)?,
                Kind::I16 => write::write_i16(&mut buf, field, value.parse()?)?,
                Kind::I32 => write::write_i32(&mut buf, field, value.parse()?)?,
                Kind::I64 => write::write_i64(&mut buf, field, value.parse()?)?,
                Kind::Text => {
                    let text_field = TextField::at(position)
                        .with_encoding(Encoding::for_label(&encoding)?)
                        .with_order(order.into());
                    write::write_text(&mut buf, &text_field, &value)?;
                }
            }
            println!("{}", hex::encode(buf));
        }
        Command::Bits(Bits::Pack { flags }) => {
            let bits = parse_flags(&flags)?;
            let byte = bits_to_byte(&bits)?;
            println!("{byte} (0x{byte:02x})");
        }
        Command::Bits(Bits::Unpack { byte }) => {
            let rendered: String = byte_to_bits(byte)
                .iter()
                .map(|&bit| char::from(b'0' + bit))
                .collect();
            println!("{rendered}");
        }
        Command::Checksum { buffer } => {
            let buf = hex::decode(buffer)?;
            let value = read::read_i64(&buf, Field::new(0, Endian::Little))?;
            println!("{:016x}", value as u64);
        }
    }
    Ok(())
}

/// Parses a flag string like "10100000" into bit values.
fn parse_flags(flags: &str) -> Result<Vec<u8>, CliError> {
    flags
        .chars()
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            other => Err(format!("flag characters must be 0 or 1, got {other:?}").into()),
        })
        .collect()
}
