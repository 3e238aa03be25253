/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Floor, InputError};

/// Parses a console request of the form `"<origin> <destination>"`.
pub fn parse_request_line(line: &str) -> Result<(Floor, Floor), InputError> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(origin), Some(destination), None) => Ok((origin.parse()?, destination.parse()?)),
        _ => Err(InputError::Format(line.trim().to_string())),
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
