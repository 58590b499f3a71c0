//! Board diagram parsing and serialization for [`Board`].
//!
//! A diagram is 8 slash-separated ranks, top rank first: `w`/`b` for men,
//! `W`/`B` for crowned pieces, digits for runs of empty squares. This is
//! debug and test tooling, not a save format.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::NotationError;
use crate::piece::Piece;
use crate::square::Square;

/// The diagram for the standard starting position.
pub const STARTING_DIAGRAM: &str = "b1b1b1b1/1b1b1b1b/b1b1b1b1/8/8/1w1w1w1w/w1w1w1w1/1w1w1w1w";

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(diagram: &str) -> Result<Board, NotationError> {
        let ranks: Vec<&str> = diagram.split('/').collect();
        if ranks.len() != 8 {
            return Err(NotationError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();

        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // Diagram ranks go from 8 down to 1.
            let y = (7 - rank_index) as i8;
            let mut x: i8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(NotationError::InvalidPieceChar { character: c });
                    }
                    x += digit as i8;
                    // x enters the addition at most 8, so it cannot overflow.
                    if x > 8 {
                        return Err(NotationError::BadRankLength {
                            rank_index,
                            length: x as usize,
                        });
                    }
                } else {
                    let (color, crowned) = match c {
                        'w' => (Color::White, false),
                        'W' => (Color::White, true),
                        'b' => (Color::Black, false),
                        'B' => (Color::Black, true),
                        _ => return Err(NotationError::InvalidPieceChar { character: c }),
                    };

                    let sq = Square::from_coords(x, y).ok_or(NotationError::BadRankLength {
                        rank_index,
                        length: x as usize + 1,
                    })?;

                    let piece = if crowned {
                        Piece::new_crowned(color, sq)
                    } else {
                        Piece::new(color, sq)
                    };
                    board.place(piece);
                    x += 1;
                }
            }

            if x != 8 {
                return Err(NotationError::BadRankLength {
                    rank_index,
                    length: x as usize,
                });
            }
        }

        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0i8..8).rev() {
            let mut empty_count = 0u8;

            for x in 0i8..8 {
                let sq = Square::from_index_unchecked((y * 8 + x) as u8);
                match self.piece_at(sq) {
                    Some(id) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", self.piece(id).diagram_char())?;
                    }
                    None => {
                        empty_count += 1;
                    }
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }

            if y > 0 {
                write!(f, "/")?;
            }
        }

        Ok(())
    }
}
