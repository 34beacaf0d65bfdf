use super::{board::Board, moves::Move, pit::Pit, player::Player};

impl Board {
    /// Every move the rules accept for `player`, ordered by pit then R, B, TR, TB
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        Pit::owned_by(player)
            .flat_map(Move::all_from)
            .filter(|mv| self.is_legal(mv, player))
            .collect()
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        Pit::owned_by(player)
            .flat_map(Move::all_from)
            .any(|mv| self.is_legal(&mv, player))
    }
}
