//! FEN-to-GameState parser.
//!
//! Builds a mailbox position plus rights, en-passant target and clocks from a
//! Forsyth-Edwards Notation string. The history stack of the result is empty.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::square_geometry::{file, rank, square_at};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let side_to_move = parse_side_to_move(side_part)?;

    let mut game_state = GameState::new_empty();
    game_state.board = parse_board(board_part)?;
    game_state.side_to_move = side_to_move;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square =
        parse_en_passant_square(en_passant_part, side_to_move, &game_state.board)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("halfmove clock '{halfmove_part}'")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("fullmove number '{fullmove_part}'")))?;

    Ok(game_state)
}

fn invalid(what: &str) -> ChessErrors {
    ChessErrors::InvalidFen(what.to_owned())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid(&format!(
            "board layout has {} ranks, expected 8",
            ranks.len()
        )));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first.
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid(&format!("rank {} is wider than 8 files", board_rank + 1)));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;

            if file >= 8 {
                return Err(invalid(&format!("rank {} is wider than 8 files", board_rank + 1)));
            }

            board.set(square_at(board_rank, file), Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(invalid(&format!("rank {} does not cover 8 files", board_rank + 1)));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(&format!("side-to-move field '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;

    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.grant(Color::Light, CastleWing::Kingside),
            'Q' => rights.grant(Color::Light, CastleWing::Queenside),
            'k' => rights.grant(Color::Dark, CastleWing::Kingside),
            'q' => rights.grant(Color::Dark, CastleWing::Queenside),
            _ => return Err(invalid(&format!("castling rights character '{ch}'"))),
        }
    }

    Ok(rights)
}

/// The target must be an empty square on the rank a double push of the
/// opponent skips over, with the pushed pawn standing just beyond it.
fn parse_en_passant_square(
    en_passant_part: &str,
    side_to_move: Color,
    board: &Board,
) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(&format!("en-passant square '{en_passant_part}'")))?;

    let (expected_rank, pushed_pawn_rank) = match side_to_move {
        Color::Light => (5, 4),
        Color::Dark => (2, 3),
    };
    if rank(square) != expected_rank {
        return Err(invalid(&format!(
            "en-passant square '{en_passant_part}' is not on the skipped rank"
        )));
    }

    if !board.is_empty(square) {
        return Err(invalid(&format!(
            "en-passant square '{en_passant_part}' is occupied"
        )));
    }

    let pushed_pawn_square = square_at(pushed_pawn_rank, file(square));
    if board.get(pushed_pawn_square) != Some(Piece::new(PieceKind::Pawn, side_to_move.opposite())) {
        return Err(invalid(&format!(
            "en-passant square '{en_passant_part}' has no pawn that just double-pushed"
        )));
    }

    Ok(Some(square))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state.side_to_move, Color::Light);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(game_state.castling_rights, CastlingRights::ALL);
        assert_eq!(
            game_state.piece_at(4),
            Some(Piece::new(PieceKind::King, Color::Light))
        );
        assert_eq!(
            game_state.piece_at(59),
            Some(Piece::new(PieceKind::Queen, Color::Dark))
        );
        assert!(game_state.history().is_empty());
    }

    #[test]
    fn parses_partial_rights_and_en_passant_target() {
        let game_state =
            parse_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w Kq d6 0 3")
                .expect("test FEN should parse");
        assert_eq!(game_state.en_passant_square, Some(43));
        assert!(game_state.castling_rights.has(Color::Light, CastleWing::Kingside));
        assert!(!game_state.castling_rights.has(Color::Light, CastleWing::Queenside));
        assert!(!game_state.castling_rights.has(Color::Dark, CastleWing::Kingside));
        assert!(game_state.castling_rights.has(Color::Dark, CastleWing::Queenside));
        assert_eq!(game_state.fullmove_number, 3);
    }

    #[test]
    fn rejects_malformed_fields() {
        let bad = [
            "",
            "8/8/8/8/8/8/8 w - - 0 1",
            "8/8/8/8/8/8/8/8/8 w - - 0 1",
            "9/8/8/8/8/8/8/8 w - - 0 1",
            "7/8/8/8/8/8/8/8 w - - 0 1",
            "ppppppppp/8/8/8/8/8/8/8 w - - 0 1",
            "4x3/8/8/8/8/8/8/8 w - - 0 1",
            "8/8/8/8/8/8/8/8 x - - 0 1",
            "8/8/8/8/8/8/8/8 w KX - 0 1",
            "8/8/8/8/8/8/8/8 w - z9 0 1",
            "8/8/8/8/8/8/8/8 w - e3 0 1",
            "4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1",
            "4k3/8/3N4/3pP3/8/8/8/4K3 w - d6 0 1",
            "4k3/8/8/3PP3/8/8/8/4K3 w - d6 0 1",
            "8/8/8/8/8/8/8/8 w - - a 1",
            "8/8/8/8/8/8/8/8 w - - 0 -1",
            "8/8/8/8/8/8/8/8 w - - 0",
            "8/8/8/8/8/8/8/8 w - - 0 1 extra",
        ];

        for fen in bad {
            assert!(
                matches!(parse_fen(fen), Err(ChessErrors::InvalidFen(_))),
                "expected InvalidFen for {fen:?}"
            );
        }
    }
}
