//! Legal destinations: raw movement plus special moves, pruned against the
//! mover's own check state.

use super::special::EnPassant;
use super::threats::Threat;
use super::{Board, Coordinate, Piece, PieceId, PieceKind, ScanMode};

impl Board {
    /// The squares the UI may accept as a drop target for `id`. Empty for
    /// unknown or captured pieces. Turn order is not considered here.
    #[must_use]
    pub fn legal_destinations(&self, id: PieceId) -> Vec<Coordinate> {
        let Some(piece) = self.piece(id) else {
            return Vec::new();
        };

        let mut candidates = self.movement_of(piece, ScanMode::StopAtFirstEnemy);
        for extra in self.special_movement(id) {
            if !candidates.contains(&extra) {
                candidates.push(extra);
            }
        }
        // Kings are never captured, even when free play lets a side move twice.
        candidates.retain(|&sq| self.piece_at(sq).map_or(true, |p| p.kind != PieceKind::King));

        let threats = self.threateners(piece.color);
        if piece.kind == PieceKind::King {
            self.filter_king_moves(piece, candidates, &threats)
        } else {
            self.filter_piece_moves(piece, candidates, &threats)
        }
    }

    fn filter_piece_moves(
        &self,
        piece: &Piece,
        mut candidates: Vec<Coordinate>,
        threats: &[Threat],
    ) -> Vec<Coordinate> {
        let en_passant = self.en_passant(piece.id);

        match threats {
            [] => {}
            // Capture the attacker or step into its line. En passant counts as
            // capturing a checking pawn even though it lands elsewhere.
            [threat] => candidates.retain(|&sq| {
                threat.contains(sq)
                    || en_passant
                        .is_some_and(|ep| ep.destination == sq && ep.captured == threat.attacker)
            }),
            // Double check: only the king can answer.
            _ => return Vec::new(),
        }

        if let Some(line) = self.pin_line(piece.id) {
            candidates.retain(|sq| line.contains(sq));
        }

        if let Some(ep) = en_passant {
            if candidates.contains(&ep.destination) && self.en_passant_exposes_king(piece, ep) {
                candidates.retain(|&sq| sq != ep.destination);
            }
        }

        candidates
    }

    fn filter_king_moves(
        &self,
        king: &Piece,
        mut candidates: Vec<Coordinate>,
        threats: &[Threat],
    ) -> Vec<Coordinate> {
        let enemy = king.color.opponent();
        let castles = self.castling(king.id);

        for threat in threats {
            // The attacker's own square stays: capturing it is fine unless it
            // is defended, which the attacked-square pass below decides.
            let attacker_square = threat.squares.first().copied();
            candidates.retain(|&sq| Some(sq) == attacker_square || !threat.contains(sq));
            if let Some(retreat) = threat.unsafe_retreat(king.position) {
                candidates.retain(|&sq| sq != retreat);
            }
        }

        candidates.retain(|&sq| !self.is_square_attacked(sq, enemy, Some(king.id)));

        if !self.config.legacy_castling {
            let in_check = !threats.is_empty();
            for castle in castles.iter() {
                let transit_attacked = self.is_square_attacked(castle.rook_to, enemy, None);
                if in_check || transit_attacked {
                    candidates.retain(|&sq| sq != castle.king_to);
                }
            }
        }

        candidates
    }

    /// Play the capture on a scratch copy and see whether the king is hit.
    /// Catches the rank pin where both pawns leave the line at once.
    fn en_passant_exposes_king(&self, pawn: &Piece, ep: EnPassant) -> bool {
        let Some(king) = self.king(pawn.color).map(Piece::position) else {
            return false;
        };
        let mut probe = self.clone();
        probe.capture(ep.captured);
        probe.relocate(pawn.id, ep.destination);
        probe.is_square_attacked(king, pawn.color.opponent(), None)
    }
}
