//! Threats against kings: check, checkmate, attacked squares and pins.

use log::info;

use super::movegen::pawn_diagonals;
use super::rays::{knight_jumps, ray};
use super::{
    Board, Color, Coordinate, Direction, GameOutcome, Piece, PieceId, PieceKind, ScanMode,
};

/// Squares through which one piece threatens the enemy king.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Threat {
    pub attacker: PieceId,
    /// The attacker's own square, every square between it and the king, and
    /// the king's square. Occupying any of the first two ends the threat.
    pub squares: Vec<Coordinate>,
    /// Direction from attacker to king for sliding threats
    pub line: Option<Direction>,
}

impl Threat {
    #[inline]
    #[must_use]
    pub fn contains(&self, sq: Coordinate) -> bool {
        self.squares.contains(&sq)
    }

    /// The square behind the king along a sliding threat. Stepping back
    /// there keeps the king on the line of attack.
    #[must_use]
    pub fn unsafe_retreat(&self, king: Coordinate) -> Option<Coordinate> {
        self.line.and_then(|dir| king.step(dir))
    }
}

impl Board {
    /// How `id` currently threatens the enemy king, if it does.
    #[must_use]
    pub fn threat_squares(&self, id: PieceId) -> Option<Threat> {
        let piece = self.piece(id)?;
        let king = self.king(piece.color.opponent())?.position;

        match piece.kind {
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                let dir = Direction::between(piece.position, king)
                    .filter(|&dir| piece.kind.slides_along(dir))?;
                let mut squares = vec![piece.position];
                for &sq in ray(piece.position, dir) {
                    squares.push(sq);
                    if sq == king {
                        return Some(Threat {
                            attacker: id,
                            squares,
                            line: Some(dir),
                        });
                    }
                    if self.is_occupied(sq) {
                        return None;
                    }
                }
                None
            }
            PieceKind::Knight => self
                .knight_movement(piece)
                .contains(&king)
                .then(|| Threat {
                    attacker: id,
                    squares: vec![piece.position],
                    line: None,
                }),
            PieceKind::Pawn => self.pawn_threat_origin(id).map(|origin| Threat {
                attacker: id,
                squares: vec![origin],
                line: None,
            }),
            PieceKind::King => None,
        }
    }

    /// Every enemy threat against `color`'s king, in id order.
    #[must_use]
    pub fn threateners(&self, color: Color) -> Vec<Threat> {
        self.pieces_of(color.opponent())
            .filter_map(|p| self.threat_squares(p.id))
            .collect()
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.pieces_of(color.opponent())
            .any(|p| self.threat_squares(p.id).is_some())
    }

    /// Recompute `checked` and `threatener` on both kings.
    pub(crate) fn refresh_check_state(&mut self) {
        for color in Color::BOTH {
            let threatener = self.threateners(color).first().map(|t| t.attacker);
            let Some(king_id) = self.king(color).map(Piece::id) else {
                continue;
            };
            let king = &mut self.pieces[king_id.index()];
            king.checked = threatener.is_some();
            king.threatener = threatener;
        }
    }

    /// True if `color` has any legal destination for any piece: the king
    /// can step away, or another piece can capture or block the threat.
    #[must_use]
    pub fn has_escape(&self, color: Color) -> bool {
        let king_can_move = self
            .king(color)
            .is_some_and(|king| !self.legal_destinations(king.id).is_empty());
        king_can_move
            || self
                .pieces_of(color)
                .filter(|p| p.kind != PieceKind::King)
                .any(|p| !self.legal_destinations(p.id).is_empty())
    }

    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_escape(color)
    }

    /// Declare checkmate against the side to move if it applies.
    pub(crate) fn refresh_outcome(&mut self) {
        let loser = self.side_to_move;
        self.outcome = if self.is_checkmate(loser) {
            info!("checkmate: {} wins", loser.opponent());
            Some(GameOutcome::Checkmate {
                winner: loser.opponent(),
            })
        } else {
            None
        };
    }

    /// Squares a piece attacks: every square it could capture on, including
    /// ones held by its own side. Sliders see through `ignoring`.
    pub(crate) fn attacks(&self, piece: &Piece, ignoring: Option<PieceId>) -> Vec<Coordinate> {
        match piece.kind {
            PieceKind::Pawn => pawn_diagonals(piece).collect(),
            PieceKind::Knight => knight_jumps(piece.position).to_vec(),
            PieceKind::King => Direction::ALL
                .iter()
                .filter_map(|&dir| piece.position.step(dir))
                .collect(),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                let mut squares = Vec::new();
                for &dir in piece.kind.directions() {
                    for &sq in ray(piece.position, dir) {
                        squares.push(sq);
                        let blocker = self.piece_at(sq).map(Piece::id);
                        if blocker.is_some() && blocker != ignoring {
                            break;
                        }
                    }
                }
                squares
            }
        }
    }

    /// True if any live piece of color `by` attacks `sq`, treating the
    /// `ignoring` piece as absent.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Coordinate, by: Color, ignoring: Option<PieceId>) -> bool {
        self.pieces_of(by)
            .filter(|p| Some(p.id) != ignoring)
            .any(|p| self.attacks(p, ignoring).contains(&sq))
    }

    /// If `id` is pinned to its king, the squares it may still stand on:
    /// those between king and pinner, and the pinner's own square.
    #[must_use]
    pub fn pin_line(&self, id: PieceId) -> Option<Vec<Coordinate>> {
        let piece = self.piece(id).filter(|p| p.kind != PieceKind::King)?;
        let king = self.king(piece.color)?.position;
        Direction::between(king, piece.position)?;

        self.pieces_of(piece.color.opponent()).find_map(|attacker| {
            let dir = Direction::between(attacker.position, king)
                .filter(|&dir| attacker.kind.slides_along(dir))?;
            let seen = self.sliding_movement(attacker, &[dir], ScanMode::ThroughEnemies);
            if !seen.contains(&king) {
                return None;
            }
            let mut line: Vec<Coordinate> =
                seen.into_iter().take_while(|&sq| sq != king).collect();
            let mut blockers = line.iter().filter(|&&sq| self.is_occupied(sq));
            let pinned = blockers.next() == Some(&piece.position) && blockers.next().is_none();
            pinned.then(|| {
                line.push(attacker.position);
                line
            })
        })
    }
}
