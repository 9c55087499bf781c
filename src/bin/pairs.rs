use distress::packet::{parse_input, right_order_index_sum};
use distress::parser::read_from_stdin_and_parse;

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let packets = read_from_stdin_and_parse(parse_input)?;
    let sum = right_order_index_sum(&packets)?;

    println!("Sum of indices of pairs in right order: {}", sum);

    Ok(())
}
