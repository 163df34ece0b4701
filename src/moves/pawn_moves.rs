use crate::game_state::chess_rules::{pawn_forward, pawn_home_rank};
use crate::game_state::chess_types::{Board, Color, Square};

/// Forward pushes onto empty squares, a double step from the home rank, and
/// diagonal captures. A pawn on the far rank has no moves.
pub fn pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let forward = pawn_forward(color);

    if let Some(one) = from.offset(forward, 0) {
        if board.piece_at(one).is_none() {
            out.push(one);

            if from.row == pawn_home_rank(color) {
                if let Some(two) = from.offset(2 * forward, 0) {
                    if board.piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = from.offset(forward, d_col) {
            if board.piece_at(target).is_some_and(|p| p.color != color) {
                out.push(target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pawn_moves;
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};

    fn pawn(color: Color) -> Option<Piece> {
        Some(Piece::new(color, PieceKind::Pawn))
    }

    #[test]
    fn white_pawn_double_steps_from_home_rank() {
        let board = Board::starting_position();
        let mut out = Vec::new();
        pawn_moves(&board, Square::new(6, 4), Color::White, &mut out);
        assert_eq!(out, vec![Square::new(5, 4), Square::new(4, 4)]);
    }

    #[test]
    fn black_pawn_moves_down_the_board() {
        let board = Board::starting_position();
        let mut out = Vec::new();
        pawn_moves(&board, Square::new(1, 0), Color::Black, &mut out);
        assert_eq!(out, vec![Square::new(2, 0), Square::new(3, 0)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut board = Board::empty();
        board.set(Square::new(6, 4), pawn(Color::White));
        board.set(Square::new(5, 4), pawn(Color::Black));
        let mut out = Vec::new();
        pawn_moves(&board, Square::new(6, 4), Color::White, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let mut board = Board::empty();
        board.set(Square::new(6, 4), pawn(Color::White));
        board.set(Square::new(4, 4), pawn(Color::Black));
        let mut out = Vec::new();
        pawn_moves(&board, Square::new(6, 4), Color::White, &mut out);
        assert_eq!(out, vec![Square::new(5, 4)]);
    }

    #[test]
    fn pawn_off_home_rank_steps_once() {
        let mut board = Board::empty();
        board.set(Square::new(5, 4), pawn(Color::White));
        let mut out = Vec::new();
        pawn_moves(&board, Square::new(5, 4), Color::White, &mut out);
        assert_eq!(out, vec![Square::new(4, 4)]);
    }

    #[test]
    fn pawn_captures_diagonally_only_enemies() {
        let mut board = Board::empty();
        board.set(Square::new(4, 4), pawn(Color::White));
        board.set(Square::new(3, 3), pawn(Color::Black));
        board.set(Square::new(3, 5), pawn(Color::White));
        let mut out = Vec::new();
        pawn_moves(&board, Square::new(4, 4), Color::White, &mut out);
        assert_eq!(out, vec![Square::new(3, 4), Square::new(3, 3)]);
    }

    #[test]
    fn pawn_on_far_rank_is_stuck() {
        let mut board = Board::empty();
        board.set(Square::new(7, 2), pawn(Color::Black));
        let mut out = Vec::new();
        pawn_moves(&board, Square::new(7, 2), Color::Black, &mut out);
        assert!(out.is_empty());
    }
}
