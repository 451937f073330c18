use crate::errors::PathParseError;
use crate::geom::Point;
use crate::plot::DrawCommand;

/// Read SVG path data built from move, line and close commands back into
/// [`DrawCommand`]s, with relative commands resolved to absolute points.
///
/// Handles everything [`crate::export::to_svg_path`] can emit, plus the rest
/// of the M/L/Z grammar: lowercase relative forms, implicit repeated pairs
/// (after a move they are line-tos), comma or whitespace separators, and
/// numbers packed without separators such as `1-2` or `.5.5`.
pub fn parse_svg_path(data: &str) -> Result<Vec<DrawCommand>, PathParseError> {
    let mut scanner = Scanner {
        bytes: data.as_bytes(),
        text: data,
        pos: 0,
    };
    let mut commands = Vec::new();
    let mut current: Option<u8> = None;
    let mut cursor = (0.0, 0.0);
    let mut start = (0.0, 0.0);

    loop {
        scanner.skip_separators();
        let Some(byte) = scanner.peek() else {
            break;
        };
        let at = scanner.pos;
        match byte {
            b'Z' | b'z' => {
                scanner.pos += 1;
                commands.push(DrawCommand::ClosePath);
                cursor = start;
                current = Some(byte);
            }
            b'M' | b'm' | b'L' | b'l' => {
                scanner.pos += 1;
                current = Some(byte);
                // A command letter must be followed by at least one pair.
                scanner.skip_separators();
                if !scanner.at_number() {
                    return Err(PathParseError::ExpectedNumber(scanner.pos));
                }
            }
            b if b.is_ascii_alphabetic() => {
                return Err(PathParseError::UnsupportedCommand(b as char, at));
            }
            _ if scanner.at_number() => {
                let command = match current {
                    None => return Err(PathParseError::MissingCommand(at)),
                    Some(b'Z') | Some(b'z') => {
                        return Err(PathParseError::UnexpectedCharacter(scanner.current_char(), at))
                    }
                    Some(command) => command,
                };
                let x = scanner.number()?;
                scanner.skip_separators();
                let y = scanner.number()?;
                let (x, y) = if command.is_ascii_lowercase() {
                    (cursor.0 + x, cursor.1 + y)
                } else {
                    (x, y)
                };
                let point = Point::new(x, y).map_err(|_| PathParseError::NonFiniteCoordinate(at))?;
                cursor = (x, y);
                match command {
                    b'M' | b'm' => {
                        commands.push(DrawCommand::MoveTo(point));
                        start = cursor;
                        // Further pairs in the same run draw lines.
                        current = Some(if command == b'M' { b'L' } else { b'l' });
                    }
                    _ => commands.push(DrawCommand::LineTo(point)),
                }
            }
            _ => return Err(PathParseError::UnexpectedCharacter(scanner.current_char(), at)),
        }
    }

    Ok(commands)
}

struct Scanner<'a> {
    bytes: &'a [u8],
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn current_char(&self) -> char {
        self.text[self.pos..].chars().next().unwrap_or('\0')
    }

    fn skip_separators(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() || b == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn at_number(&self) -> bool {
        match self.peek() {
            Some(b) if b.is_ascii_digit() || b == b'.' => true,
            Some(b'+') | Some(b'-') => {
                matches!(self.peek_at(1), Some(b) if b.is_ascii_digit() || b == b'.')
            }
            _ => false,
        }
    }

    fn digits(&mut self) -> usize {
        let begin = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - begin
    }

    fn number(&mut self) -> Result<f64, PathParseError> {
        let begin = self.pos;
        if matches!(self.peek(), Some(b'+') | Some(b'-')) {
            self.pos += 1;
        }
        let mut count = self.digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            count += self.digits();
        }
        if count == 0 {
            self.pos = begin;
            return Err(PathParseError::ExpectedNumber(begin));
        }
        if matches!(self.peek(), Some(b'e') | Some(b'E')) {
            let mark = self.pos;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+') | Some(b'-')) {
                self.pos += 1;
            }
            if self.digits() == 0 {
                // Not an exponent after all, leave the letter for the caller.
                self.pos = mark;
            }
        }
        let text = &self.text[begin..self.pos];
        text.parse::<f64>()
            .map_err(|_| PathParseError::InvalidNumber(text.to_string(), begin))
    }
}
