use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use twoply_chess::game_state::board::Board;
use twoply_chess::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Square};
use twoply_chess::game_state::game_state::GameState;
use twoply_chess::move_generation::move_generator::generate_all_moves;
use twoply_chess::moves::chess_move::Move;
use twoply_chess::search::minimax::find_best_move;

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    "1r2k3/P7/8/8/8/8/6p1/4K2R b K - 0 1",
];

#[derive(Debug, PartialEq)]
struct Snapshot {
    board: Board,
    white_to_move: bool,
    white_king: Square,
    black_king: Square,
    en_passant: Option<Square>,
    rights: CastlingRights,
    log_len: usize,
}

fn snapshot(game: &GameState) -> Snapshot {
    Snapshot {
        board: *game.board(),
        white_to_move: game.white_to_move(),
        white_king: game.king_location(Color::White),
        black_king: game.king_location(Color::Black),
        en_passant: game.en_passant_target(),
        rights: game.castling_rights(),
        log_len: game.move_log().len(),
    }
}

fn play(game: &mut GameState, notations: &[&str]) {
    for notation in notations {
        let mv = game.find_legal_move(notation).expect("legal move");
        game.make_move(mv);
    }
}

fn notations(moves: &[Move]) -> Vec<String> {
    moves.iter().map(|m| m.get_chess_notation()).collect()
}

/// Leaves `game` at a random position reached from `fen` within `plies`.
fn random_walk(fen: &str, plies: usize, seed: u64) -> GameState {
    let mut game = GameState::from_fen(fen).expect("fen");
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        let moves = game.get_valid_moves();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        game.make_move(*mv);
    }
    game
}

#[test]
fn make_then_undo_restores_everything() {
    for (i, fen) in POSITIONS.iter().enumerate() {
        for seed in 0..3 {
            let mut game = random_walk(fen, 6, seed * 10 + i as u64);
            let before = snapshot(&game);
            for mv in game.get_valid_moves() {
                game.make_move(mv);
                game.undo_move();
                assert_eq!(snapshot(&game), before, "round trip of {mv} from {fen}");
            }
        }
    }
}

#[test]
fn generation_leaves_state_untouched() {
    for fen in POSITIONS {
        let mut game = GameState::from_fen(fen).expect("fen");
        let before = snapshot(&game);
        game.get_valid_moves();
        assert_eq!(snapshot(&game), before);
    }
}

#[test]
fn legal_moves_never_expose_the_mover_king() {
    for (i, fen) in POSITIONS.iter().enumerate() {
        let mut game = random_walk(fen, 8, 99 + i as u64);
        let mover = game.side_to_move();
        for mv in game.get_valid_moves() {
            game.make_move(mv);
            let king = game.king_location(mover);
            let replies = generate_all_moves(&game);
            assert!(
                replies.iter().all(|reply| reply.end() != king),
                "{mv} leaves the king on {king:?} attacked in {fen}"
            );
            game.undo_move();
        }
    }
}

#[test]
fn terminal_positions_have_exactly_one_flag() {
    let mut finished = 0;
    for seed in 0..12 {
        let mut game = random_walk(POSITIONS[0], 400, seed);
        let moves = game.get_valid_moves();
        if moves.is_empty() {
            finished += 1;
            let in_check = game.in_check();
            assert_eq!(game.check_mate(), in_check);
            assert_eq!(game.stale_mate(), !in_check);
            assert!(game.is_game_over());
        } else {
            assert!(!game.check_mate() && !game.stale_mate());
        }
    }

    for fen in ["7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", "R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1"] {
        let mut game = GameState::from_fen(fen).expect("fen");
        assert!(game.get_valid_moves().is_empty());
        assert!(game.check_mate() != game.stale_mate());
        finished += 1;
    }
    assert!(finished >= 2);
}

#[test]
fn king_side_castle_gating() {
    let castle_present = |fen: &str| {
        let mut game = GameState::from_fen(fen).expect("fen");
        game.get_valid_moves()
            .iter()
            .any(|m| m.is_castle() && m.get_chess_notation() == "e1g1")
    };

    assert!(castle_present("4k3/8/8/8/8/8/8/4K2R w K - 0 1"));
    // Right revoked.
    assert!(!castle_present("4k3/8/8/8/8/8/8/4K2R w - - 0 1"));
    // Intermediate square occupied.
    assert!(!castle_present("4k3/8/8/8/8/8/8/4KB1R w K - 0 1"));
    // King in check, transit attacked, destination attacked.
    assert!(!castle_present("4r1k1/8/8/8/8/8/8/4K2R w K - 0 1"));
    assert!(!castle_present("5rk1/8/8/8/8/8/8/4K2R w K - 0 1"));
    assert!(!castle_present("6rk/8/8/8/8/8/8/4K2R w K - 0 1"));
    // Rook itself attacked does not matter.
    assert!(castle_present("k6r/8/8/8/8/8/8/4K2R w K - 0 1"));
}

#[test]
fn castling_moves_both_pieces_and_undo_puts_them_back() {
    let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").expect("fen");
    let before = snapshot(&game);
    play(&mut game, &["e8c8"]);
    assert_eq!(game.board().view((0, 2)), Some(Piece::new(Color::Black, PieceKind::King)));
    assert_eq!(game.board().view((0, 3)), Some(Piece::new(Color::Black, PieceKind::Rook)));
    assert!(game.board().is_empty((0, 0)));
    assert!(!game.castling_rights().king_side(Color::Black));
    assert!(!game.castling_rights().queen_side(Color::Black));
    game.undo_move();
    assert_eq!(snapshot(&game), before);
}

#[test]
fn moved_king_side_rook_never_castles_again() {
    let mut game = GameState::from_fen("r3k2r/p7/8/8/8/8/P7/R3K2R w KQkq - 0 1").expect("fen");
    play(&mut game, &["h1h2", "a7a6", "h2h1", "a6a5"]);

    assert_eq!(game.board().view((7, 7)), Some(Piece::new(Color::White, PieceKind::Rook)));
    let legal = notations(&game.get_valid_moves());
    assert!(!legal.contains(&"e1g1".to_owned()));
    assert!(legal.contains(&"e1c1".to_owned()));
}

#[test]
fn en_passant_lasts_exactly_one_ply() {
    let mut game = GameState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").expect("fen");
    play(&mut game, &["d7d5"]);
    assert_eq!(game.en_passant_target(), Some((2, 3)));
    let ep: Vec<Move> = game.get_valid_moves().into_iter().filter(|m| m.is_en_passant()).collect();
    assert_eq!(notations(&ep), vec!["e5d6"]);

    play(&mut game, &["e1d1", "e8f7"]);
    assert_eq!(game.en_passant_target(), None);
    assert!(game.get_valid_moves().iter().all(|m| !m.is_en_passant()));
}

#[test]
fn en_passant_capture_removes_the_passed_pawn() {
    let mut game = GameState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").expect("fen");
    play(&mut game, &["d7d5", "e5d6"]);
    assert!(game.board().is_empty((3, 3)));
    assert_eq!(game.board().view((2, 3)), Some(Piece::new(Color::White, PieceKind::Pawn)));

    game.undo_move();
    assert_eq!(game.board().view((3, 3)), Some(Piece::new(Color::Black, PieceKind::Pawn)));
    assert!(game.board().is_empty((2, 3)));
    assert_eq!(game.en_passant_target(), Some((2, 3)));
}

#[test]
fn pawns_reaching_the_last_row_become_queens() {
    let mut game = GameState::from_fen("8/P6k/8/8/8/8/p7/4K3 w - - 0 1").expect("fen");
    let promotions: Vec<Move> = game
        .get_valid_moves()
        .into_iter()
        .filter(|m| m.is_promotion())
        .collect();
    assert_eq!(notations(&promotions), vec!["a7a8"]);

    play(&mut game, &["a7a8"]);
    assert_eq!(game.board().view((0, 0)), Some(Piece::new(Color::White, PieceKind::Queen)));

    let black_promotion = game.find_legal_move("a2a1").expect("legal");
    assert!(black_promotion.is_promotion());
    game.make_move(black_promotion);
    assert_eq!(game.board().view((7, 0)), Some(Piece::new(Color::Black, PieceKind::Queen)));

    game.undo_move();
    assert_eq!(game.board().view((6, 0)), Some(Piece::new(Color::Black, PieceKind::Pawn)));
}

#[test]
fn rook_rays_stop_at_blockers() {
    // Own king on e1 and own pawn on a3 cut the rook's rays.
    let mut game = GameState::from_fen("k7/8/8/8/8/P7/8/R3K3 w - - 0 1").expect("fen");
    let mut rook: Vec<String> = notations(
        &game
            .get_valid_moves()
            .into_iter()
            .filter(|m| m.start() == (7, 0))
            .collect::<Vec<_>>(),
    );
    rook.sort();
    assert_eq!(rook, vec!["a1a2", "a1b1", "a1c1", "a1d1"]);
}

#[test]
fn rook_slides_up_to_an_enemy_king_line() {
    // Rook on a1, undefended king two files away on c8.
    let mut game = GameState::from_fen("2k5/8/8/8/8/8/8/R6K w - - 0 1").expect("fen");
    let rook: Vec<String> = notations(
        &game
            .get_valid_moves()
            .into_iter()
            .filter(|m| m.start() == (7, 0))
            .collect::<Vec<_>>(),
    );
    assert!(rook.contains(&"a1a8".to_owned()));
    assert!(rook.contains(&"a1c1".to_owned()));
    assert!(!rook.contains(&"a1h1".to_owned()));
    assert_eq!(rook.len(), 13);
}

#[test]
fn search_finds_mate_in_one() {
    for fen in [
        "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
        "r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1",
        "k7/8/1K6/8/8/8/8/7Q w - - 0 1",
    ] {
        let mut game = GameState::from_fen(fen).expect("fen");
        let moves = game.get_valid_moves();
        let best = find_best_move(&mut game, &moves).expect("a move");
        game.make_move(best);
        assert!(game.get_valid_moves().is_empty(), "{best} does not mate in {fen}");
        assert!(game.check_mate());
    }
}
