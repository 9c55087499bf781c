use distress::packet::{decoder_key, parse_input};
use distress::parser::read_from_stdin_and_parse;

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let packets = read_from_stdin_and_parse(parse_input)?;

    println!("Decoder key: {}", decoder_key(packets));

    Ok(())
}
