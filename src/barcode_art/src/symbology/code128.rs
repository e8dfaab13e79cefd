use barcoders::sym::code128::Code128 as Code128Symbol;

use super::Symbology;
use crate::error::RenderError;

/// Selects Code Set B in a `barcoders` payload.
const SET_B: char = 'Ɓ';
/// Selects Code Set C in a `barcoders` payload.
const SET_C: char = 'Ć';

/// Quiet zone on each side, in modules.
pub const QUIET_ZONE: usize = 10;
/// Shortest digit run worth packing into Code Set C.
const MIN_DIGIT_RUN: usize = 4;

/// Code 128 over printable ASCII, using Code Set B for text and Code Set C for
/// digit runs. Symbol encoding is done by `barcoders`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Code128;

impl Code128 {
    /// The `barcoders` payload for `data`: text prefixed with its code set
    /// selectors.
    pub fn payload(data: &str) -> Result<String, RenderError> {
        if data.is_empty() {
            return Err(RenderError::EmptyInput);
        }
        if let Some((position, ch)) = data
            .chars()
            .enumerate()
            .find(|(_, c)| !(' '..='~').contains(c))
        {
            return Err(RenderError::UnsupportedCharacter { ch, position });
        }

        // Printable ASCII only from here on, so bytes and chars line up.
        let bytes = data.as_bytes();
        let mut payload = String::with_capacity(bytes.len() + 4);
        let mut in_set_c = false;
        let mut i = 0;
        while i < bytes.len() {
            let run = digit_run(bytes, i);
            if in_set_c && run < 2 {
                payload.push(SET_B);
                in_set_c = false;
            } else if !in_set_c && run >= MIN_DIGIT_RUN && run % 2 == 0 {
                payload.push(SET_C);
                in_set_c = true;
            } else if i == 0 {
                payload.push(SET_B);
            }

            // An odd run keeps its first digit in B so the rest pairs up.
            let take = if in_set_c { 2 } else { 1 };
            payload.push_str(&data[i..i + take]);
            i += take;
        }
        Ok(payload)
    }
}

impl Symbology for Code128 {
    fn name(&self) -> &'static str {
        "code128"
    }

    fn encode(&self, data: &str) -> Result<Vec<bool>, RenderError> {
        let payload = Self::payload(data)?;
        let symbol = Code128Symbol::new(&payload)
            .map_err(|err| RenderError::Encoding(format!("{:?}", err)))?;

        let mut modules = vec![false; QUIET_ZONE];
        modules.extend(symbol.encode().into_iter().map(|module| module == 1));
        modules.extend(std::iter::repeat(false).take(QUIET_ZONE));
        Ok(modules)
    }
}

/// Length of the run of ASCII digits starting at `from`.
fn digit_run(bytes: &[u8], from: usize) -> usize {
    bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}
