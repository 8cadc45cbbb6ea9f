//! Tolerant decoder for the compact text form.
//!
//! Address fragments are routinely cut at delimiters the encoder does not
//! control, so the decoder never requires a closing `)`: when input ends
//! inside a container, whatever was built so far is returned. Corrupt input
//! (bad literals, non-hex escapes, stray characters) is still an error.

use crate::errors::JsurlError;
use crate::value::Value;

/// Decodes a complete text token into a value.
///
/// Trailing characters after the first value are an error; use
/// [`parse_prefix`] to decode a value embedded in longer text.
pub fn parse(text: &str) -> Result<Value, JsurlError> {
    let (value, consumed) = parse_prefix(text)?;
    if consumed < text.len() {
        let found = text[consumed..].chars().next().unwrap_or('\u{fffd}');
        return Err(JsurlError::UnexpectedChar {
            offset: consumed,
            found,
        });
    }
    Ok(value)
}

/// Decodes one value from the front of `text`.
///
/// Returns the value and the number of bytes consumed, which is what
/// injectors splice back over. Containers cut short by end of input decode
/// to their partial structure with everything consumed.
pub fn parse_prefix(text: &str) -> Result<(Value, usize), JsurlError> {
    if text.is_empty() {
        return Err(JsurlError::Empty);
    }
    let mut decoder = Decoder::new(text);
    let value = decoder.value()?;
    Ok((value, decoder.byte_offset()))
}

/// Best-effort decode that never fails.
///
/// Returns `default` on empty or malformed input. Used as a probe when
/// checking whether a fragment decodes at all before committing to a scheme.
pub fn try_parse(text: &str, default: Value) -> Value {
    parse(text).unwrap_or(default)
}

struct Decoder {
    chars: Vec<char>,
    pos: usize,
}

impl Decoder {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn byte_offset(&self) -> usize {
        self.chars[..self.pos].iter().map(|c| c.len_utf8()).sum()
    }

    /// Decodes a `~`-prefixed value. `Truncated` means input ended where a
    /// value was required; container loops treat that as end of input.
    fn value(&mut self) -> Result<Value, JsurlError> {
        match self.peek() {
            Some('~') => self.bump(),
            Some(found) => {
                return Err(JsurlError::UnexpectedChar {
                    offset: self.byte_offset(),
                    found,
                })
            }
            None => return Err(JsurlError::Truncated),
        }
        match self.peek() {
            None => Err(JsurlError::Truncated),
            Some('(') => {
                self.bump();
                self.container()
            }
            Some('\'') => {
                self.bump();
                Ok(Value::String(self.escaped_body()?))
            }
            Some(_) => self.literal(),
        }
    }

    /// Decodes a container body after `~(`. A leading `~` marks an array
    /// (values carry their own `~`); anything else starts an object key.
    fn container(&mut self) -> Result<Value, JsurlError> {
        if self.peek() == Some('~') {
            self.array()
        } else {
            self.object()
        }
    }

    fn array(&mut self) -> Result<Value, JsurlError> {
        let mut items = Vec::new();
        loop {
            match self.peek() {
                None => break,
                Some(')') => {
                    self.bump();
                    break;
                }
                Some('~') => match self.value() {
                    Ok(v) => items.push(v),
                    Err(JsurlError::Truncated) => break,
                    Err(e) => return Err(e),
                },
                Some(found) => {
                    return Err(JsurlError::UnexpectedChar {
                        offset: self.byte_offset(),
                        found,
                    })
                }
            }
        }
        Ok(Value::Array(items))
    }

    fn object(&mut self) -> Result<Value, JsurlError> {
        let mut entries: Vec<(String, Value)> = Vec::new();
        loop {
            match self.peek() {
                None => break,
                Some(')') => {
                    self.bump();
                    break;
                }
                _ => {}
            }
            if !entries.is_empty() {
                // entries after the first are '~'-joined
                match self.peek() {
                    Some('~') => self.bump(),
                    Some(found) => {
                        return Err(JsurlError::UnexpectedChar {
                            offset: self.byte_offset(),
                            found,
                        })
                    }
                    None => break,
                }
                match self.peek() {
                    None => break,
                    Some(')') => {
                        self.bump();
                        break;
                    }
                    _ => {}
                }
            }
            let key = self.escaped_body()?;
            match self.peek() {
                Some('~') => match self.value() {
                    Ok(v) => entries.push((key, v)),
                    // input ended mid-entry; the dangling key is dropped
                    Err(JsurlError::Truncated) => break,
                    Err(e) => return Err(e),
                },
                Some(found) => {
                    return Err(JsurlError::UnexpectedChar {
                        offset: self.byte_offset(),
                        found,
                    })
                }
                None => break,
            }
        }
        Ok(Value::Object(entries))
    }

    /// Reads an escaped string body or object key. Stops before `~`, `)`,
    /// or end of input without consuming the terminator.
    ///
    /// The body is accumulated as UTF-16 code units so `**HHHH` surrogate
    /// pairs recombine into their code points.
    fn escaped_body(&mut self) -> Result<String, JsurlError> {
        let mut units: Vec<u16> = Vec::new();
        loop {
            match self.peek() {
                None | Some('~') | Some(')') => break,
                Some('!') => {
                    self.bump();
                    if self.peek() == Some('!') {
                        self.bump();
                        units.push('!' as u16);
                    } else {
                        units.push('\'' as u16);
                    }
                }
                Some('*') => {
                    let start = self.byte_offset();
                    self.bump();
                    let double = self.peek() == Some('*');
                    if double {
                        self.bump();
                    }
                    let digits = if double { 4 } else { 2 };
                    let mut code: u32 = 0;
                    let mut complete = true;
                    for _ in 0..digits {
                        match self.peek() {
                            None => {
                                // escape cut by end of input; keep what we have
                                complete = false;
                                break;
                            }
                            Some(c) => match c.to_digit(16) {
                                Some(d) => {
                                    code = code * 16 + d;
                                    self.bump();
                                }
                                None => return Err(JsurlError::BadEscape { offset: start }),
                            },
                        }
                    }
                    if complete {
                        units.push(code as u16);
                    }
                }
                Some(c) => {
                    self.bump();
                    let mut buf = [0u16; 2];
                    units.extend_from_slice(c.encode_utf16(&mut buf));
                }
            }
        }
        Ok(String::from_utf16_lossy(&units))
    }

    /// Reads a bare literal token: `null`, `true`, `false`, or a number.
    ///
    /// A literal that runs into end of input and fails to parse is reported
    /// as `Truncated` (it may be a number cut mid-digits); one delimited by
    /// `~` or `)` is genuinely malformed.
    fn literal(&mut self) -> Result<Value, JsurlError> {
        let offset = self.byte_offset();
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c == '~' || c == ')' {
                break;
            }
            text.push(c);
            self.bump();
        }
        match text.as_str() {
            "null" => Ok(Value::Null),
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => match text.parse::<f64>() {
                Ok(n) => Ok(Value::Number(n)),
                Err(_) if self.peek().is_none() => Err(JsurlError::Truncated),
                Err(_) => Err(JsurlError::BadLiteral { offset, text }),
            },
        }
    }
}
