use awale::core::{Board, Color, Move, Pit, Player, Seeds, TOTAL_SEEDS};
use awale::utils::make_rng;
use rand::seq::SliceRandom;

fn pit(n: u8) -> Pit {
    Pit::new(n).unwrap()
}

fn play(board: &mut Board, token: &str, player: Player) -> awale::core::MoveReport {
    let mv: Move = token.parse().unwrap();
    board.apply(&mv, player).unwrap()
}

#[test]
fn test_plain_red_from_pit_one() {
    let mut board = Board::new();
    let report = play(&mut board, "1R", Player::P1);

    assert_eq!(*board.seeds(pit(1)), Seeds::new(0, 2, 2));
    assert_eq!(*board.seeds(pit(2)), Seeds::new(3, 2, 2));
    assert_eq!(*board.seeds(pit(3)), Seeds::new(3, 2, 2));
    assert_eq!(*board.seeds(pit(4)), Seeds::new(2, 2, 2));
    assert_eq!(report.last, pit(3));
    assert!(report.captured.is_empty());
    assert_eq!(board.captured(Player::P1), 0);
}

#[test]
fn test_plain_blue_from_pit_one() {
    let mut board = Board::new();
    let report = play(&mut board, "1B", Player::P1);

    assert_eq!(*board.seeds(pit(1)), Seeds::new(2, 0, 2));
    assert_eq!(*board.seeds(pit(2)), Seeds::new(2, 3, 2));
    assert_eq!(*board.seeds(pit(3)), Seeds::new(2, 2, 2));
    assert_eq!(*board.seeds(pit(4)), Seeds::new(2, 3, 2));
    assert_eq!(report.last, pit(4));
    assert_eq!(board.captured(Player::P1), 0);
}

#[test]
fn test_transparent_as_red_from_pit_one() {
    let mut board = Board::new();
    let report = play(&mut board, "1TR", Player::P1);

    assert_eq!(*board.seeds(pit(1)), Seeds::new(0, 2, 0));
    assert_eq!(*board.seeds(pit(2)), Seeds::new(2, 2, 3));
    assert_eq!(*board.seeds(pit(3)), Seeds::new(2, 2, 3));
    assert_eq!(*board.seeds(pit(4)), Seeds::new(3, 2, 2));
    assert_eq!(*board.seeds(pit(5)), Seeds::new(3, 2, 2));
    assert_eq!(report.last, pit(5));
    assert!(report.captured.is_empty());
}

#[test]
fn test_transparent_as_blue_routes_every_seed() {
    let mut board = Board::new();
    play(&mut board, "2TB", Player::P2);

    // transparent seeds first, then blue, all on odd pits
    assert_eq!(*board.seeds(pit(2)), Seeds::new(2, 0, 0));
    assert_eq!(*board.seeds(pit(3)), Seeds::new(2, 2, 3));
    assert_eq!(*board.seeds(pit(5)), Seeds::new(2, 2, 3));
    assert_eq!(*board.seeds(pit(7)), Seeds::new(2, 3, 2));
    assert_eq!(*board.seeds(pit(9)), Seeds::new(2, 3, 2));
    assert_eq!(*board.seeds(pit(4)), Seeds::new(2, 2, 2));
}

#[test]
fn test_forced_capture() {
    let mut board = Board::new();
    board.set(pit(5), Seeds::new(1, 1, 0));

    let report = play(&mut board, "3R", Player::P1);

    assert_eq!(report.last, pit(5));
    assert_eq!(report.captured, vec![pit(5)]);
    assert_eq!(report.taken, vec![3]);
    assert_eq!(report.seeds, 3);
    assert!(board.seeds(pit(5)).is_empty());
    assert_eq!(board.seeds(pit(4)).total(), 7);
    assert_eq!(board.captured(Player::P1), 3);
}

#[test]
fn test_capture_from_own_pit() {
    let mut board = Board::new();
    board.set(pit(16), Seeds::new(2, 0, 0));
    board.set(pit(1), Seeds::new(0, 2, 0));
    board.set(pit(2), Seeds::new(0, 0, 2));

    let report = play(&mut board, "16R", Player::P2);

    // 2 belongs to the mover and is still taken; the emptied 16 ends the walk
    assert_eq!(report.last, pit(2));
    assert_eq!(report.captured, vec![pit(2), pit(1)]);
    assert_eq!(report.taken, vec![3, 3]);
    assert_eq!(board.captured(Player::P2), 6);
    assert!(board.seeds(pit(2)).is_empty());
    assert_eq!(*board.seeds(pit(3)), Seeds::new(2, 2, 2));
}

#[test]
fn test_invalid_moves_leave_board_untouched() {
    let mut board = Board::new();
    board.set(pit(7), Seeds::new(0, 0, 0));
    let before = board.clone();

    for (token, player) in [("2R", Player::P1), ("7R", Player::P1), ("7TB", Player::P1), ("1B", Player::P2)] {
        let mv: Move = token.parse().unwrap();
        assert!(board.apply(&mv, player).is_err(), "{} should be rejected", token);
    }
    assert_eq!(board, before);
}

/// Play random games and check the board invariants after every move
#[test]
fn test_random_playouts_keep_invariants() {
    let mut rng = make_rng(Some(2024));

    for _ in 0..200 {
        let mut board = Board::new();
        let mut player = Player::P1;
        let mut moves = 0;

        while !board.is_game_over() && moves < 400 {
            let legal = board.legal_moves(player);
            let Some(mv) = legal.choose(&mut rng).copied() else {
                break;
            };
            let before = board.clone();
            let report = board.apply(&mv, player).unwrap();
            moves += 1;

            // legality
            assert!(mv.pit().belongs_to(player));
            assert!(before.check_move(&mv, player).unwrap() > 0);

            // conservation and monotonic scores
            assert_eq!(board.seeds_in_play(), TOTAL_SEEDS);
            for p in Player::all() {
                assert!(board.captured(p) >= before.captured(p));
            }
            assert_eq!(
                board.captured(player) - before.captured(player),
                report.seeds
            );

            // blue routing never feeds the mover
            if mv.routing() == Color::Blue {
                for own in Pit::owned_by(player) {
                    for color in Color::all() {
                        assert!(board.count(own, color) <= before.count(own, color));
                    }
                }
            }

            // captured pits form a backward walk from the last pit, each
            // holding two or three seeds just before the capture
            let mut expected = report.last;
            for captured in &report.captured {
                assert_eq!(*captured, expected);
                assert!(board.seeds(*captured).is_empty());
                expected = expected.prev();
            }
            if report.captured.len() < 16 {
                let stop = board.seeds(expected).total();
                assert!(stop != 2 && stop != 3);
            }
            assert_eq!(report.taken.len(), report.captured.len());
            for (captured, taken) in report.captured.iter().zip(&report.taken) {
                assert!(
                    *taken == 2 || *taken == 3,
                    "pit {} captured with {} seeds",
                    captured,
                    taken
                );
            }
            assert_eq!(report.taken.iter().sum::<u32>(), report.seeds);

            player = !player;
        }

        assert!(moves <= 400);
    }
}
