use std::sync::Arc;
use std::thread;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::SimulatedMove;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::ChessMove;

/// Leaf statistics of a perft walk. Everything except `nodes` classifies the
/// move that reached the leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Full perft with leaf classification. The state is walked with make/unmake
/// and is handed back unchanged.
pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut total = PerftCounts::default();

    for mv in root_moves {
        perft_recurse(generator, game_state, mv, depth - 1, &mut total)?;
    }

    Ok(total)
}

/// Node count only. The last ply is bulk counted from the move list length.
pub fn perft_nodes<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> ChessResult<usize> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = generator.generate_legal_moves(game_state)?;
    if depth == 1 {
        return Ok(moves.len());
    }

    let mut nodes = 0;
    for mv in moves {
        let mut child = SimulatedMove::new(game_state, mv)?;
        nodes += perft_nodes(generator, &mut child, depth - 1)?;
    }
    Ok(nodes)
}

/// Node count below each root move, in generation order.
pub fn perft_divide<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> ChessResult<Vec<(ChessMove, usize)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut divided = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let mut child = SimulatedMove::new(game_state, mv)?;
        let nodes = perft_nodes(generator, &mut child, depth - 1)?;
        divided.push((mv, nodes));
    }

    Ok(divided)
}

/// Same counts as `perft`, with one worker thread per root move. Every worker
/// walks its own duplicate of the position.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut root = game_state.duplicate();
    let root_moves = generator.generate_legal_moves(&mut root)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let mut local_state = game_state.duplicate();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(
                generator_ref.as_ref(),
                &mut local_state,
                mv,
                depth - 1,
                &mut local,
            );
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| ChessErrors::WorkerThreadPanicked)?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    mv: ChessMove,
    remaining_depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    let mut child = SimulatedMove::new(game_state, mv)?;

    if remaining_depth == 0 {
        return count_leaf(generator, &mut child, &mv, counts);
    }

    let replies = generator.generate_legal_moves(&mut child)?;
    for reply in replies {
        perft_recurse(generator, &mut child, reply, remaining_depth - 1, counts)?;
    }

    Ok(())
}

fn count_leaf<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    mv: &ChessMove,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    counts.nodes += 1;

    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant {
        counts.en_passant += 1;
    }
    if mv.is_castling {
        counts.castles += 1;
    }
    if mv.is_promotion() {
        counts.promotions += 1;
    }

    // The side now to move is the one the leaf move attacked.
    if game_state.in_check(game_state.side_to_move)? {
        counts.checks += 1;
        if generator.generate_legal_moves(game_state)?.is_empty() {
            counts.checkmates += 1;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    use super::*;

    const KIWIPETE_FEN: &str =
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const ENDGAME_PINS_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const PROMOTION_TRAPS_FEN: &str =
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

    struct MockMoveGenerator;

    impl MoveGenerator for MockMoveGenerator {
        fn generate_legal_moves(&self, game_state: &mut GameState) -> ChessResult<Vec<ChessMove>> {
            let dark_pawn = Piece::new(PieceKind::Pawn, Color::Dark);
            match game_state.history().len() {
                0 => Ok(vec![
                    ChessMove::en_passant(36, 43, dark_pawn),
                    ChessMove::castling(4, 6),
                ]),
                1 => Ok(vec![ChessMove::new(60, 52)]),
                _ => Ok(Vec::new()),
            }
        }
    }

    fn mock_position() -> GameState {
        GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K2R w K d6 0 1").expect("mock FEN should parse")
    }

    #[test]
    fn leaf_classification_uses_the_move_that_reached_the_leaf() {
        let mut game = mock_position();
        let counts = perft(&MockMoveGenerator, &mut game, 1).expect("perft should succeed");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 2,
                captures: 1,
                en_passant: 1,
                castles: 1,
                ..PerftCounts::default()
            }
        );

        // One ply deeper only the quiet king replies are leaves.
        let counts = perft(&MockMoveGenerator, &mut game, 2).expect("perft should succeed");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 2,
                ..PerftCounts::default()
            }
        );
        assert_eq!(game, mock_position());
    }

    #[test]
    fn depth_zero_counts_the_root_only() {
        let mut game = GameState::new_game();
        let counts = perft(&LegalMoveGenerator, &mut game, 0).expect("perft should succeed");
        assert_eq!(counts.nodes, 1);
        assert_eq!(perft_nodes(&LegalMoveGenerator, &mut game, 0), Ok(1));
        assert_eq!(perft_divide(&LegalMoveGenerator, &mut game, 0), Ok(Vec::new()));
    }

    #[test]
    fn starting_position_counts() {
        let mut game = GameState::new_game();
        let before = game.duplicate();

        assert_eq!(perft_nodes(&LegalMoveGenerator, &mut game, 1), Ok(20));
        assert_eq!(perft_nodes(&LegalMoveGenerator, &mut game, 2), Ok(400));

        let counts = perft(&LegalMoveGenerator, &mut game, 3).expect("perft should succeed");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8_902,
                captures: 34,
                checks: 12,
                ..PerftCounts::default()
            }
        );

        assert_eq!(perft_nodes(&LegalMoveGenerator, &mut game, 4), Ok(197_281));
        assert_eq!(game, before);
    }

    #[test]
    fn kiwipete_counts_castles_and_en_passant() {
        let mut game = GameState::from_fen(KIWIPETE_FEN).expect("kiwipete FEN should parse");

        let counts = perft(&LegalMoveGenerator, &mut game, 1).expect("perft should succeed");
        assert_eq!(counts.nodes, 48);
        assert_eq!(counts.captures, 8);
        assert_eq!(counts.castles, 2);

        let counts = perft(&LegalMoveGenerator, &mut game, 2).expect("perft should succeed");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 2_039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                promotions: 0,
                checks: 3,
                checkmates: 0,
            }
        );

        assert_eq!(perft_nodes(&LegalMoveGenerator, &mut game, 3), Ok(97_862));
    }

    #[test]
    fn endgame_with_pins_and_en_passant() {
        let mut game = GameState::from_fen(ENDGAME_PINS_FEN).expect("test FEN should parse");
        assert_eq!(perft_nodes(&LegalMoveGenerator, &mut game, 1), Ok(14));
        assert_eq!(perft_nodes(&LegalMoveGenerator, &mut game, 2), Ok(191));

        let counts = perft(&LegalMoveGenerator, &mut game, 3).expect("perft should succeed");
        assert_eq!(counts.nodes, 2_812);
        assert_eq!(counts.captures, 209);
        assert_eq!(counts.en_passant, 2);
        assert_eq!(counts.checks, 267);

        assert_eq!(perft_nodes(&LegalMoveGenerator, &mut game, 4), Ok(43_238));
    }

    #[test]
    fn promotion_heavy_position() {
        let mut game = GameState::from_fen(PROMOTION_TRAPS_FEN).expect("test FEN should parse");
        assert_eq!(perft_nodes(&LegalMoveGenerator, &mut game, 1), Ok(44));
        assert_eq!(perft_nodes(&LegalMoveGenerator, &mut game, 2), Ok(1_486));
        assert_eq!(perft_nodes(&LegalMoveGenerator, &mut game, 3), Ok(62_379));
    }

    #[test]
    fn divide_sums_to_the_total() {
        let mut game = GameState::from_fen(KIWIPETE_FEN).expect("kiwipete FEN should parse");
        let divided = perft_divide(&LegalMoveGenerator, &mut game, 2).expect("divide should succeed");
        assert_eq!(divided.len(), 48);
        assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<usize>(), 2_039);
    }

    #[test]
    fn multi_threaded_matches_single_threaded() {
        let mut game = GameState::from_fen(KIWIPETE_FEN).expect("kiwipete FEN should parse");
        let single = perft(&LegalMoveGenerator, &mut game, 2).expect("perft should succeed");
        let generator: Arc<dyn MoveGenerator> = Arc::new(LegalMoveGenerator);
        let multi = perft_multi_threaded(generator, &game, 2).expect("perft should succeed");
        assert_eq!(single, multi);
    }
}
