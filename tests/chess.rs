mod common;
use checkmind::prelude::*;
use common::*;

#[cfg(test)]
mod chess
{
    use super::*;

    #[test]
    fn start_position_round_trips()
    {
        let _setup = setup::setup();
        let board = Board::default();
        assert_eq!(board.fen(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(templates::board(&board.fen()), board);
        assert_eq!(board.legal_moves().len(), 20);
    }

    #[test]
    fn bad_fen_is_rejected()
    {
        let _setup = setup::setup();
        for fen in ["", "not a fen", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1", "8/8/8/8/8/8/8/8 w - - 0 1"]
        {
            let err = fen.parse::<Board>().unwrap_err();
            assert_eq!(err.kind, Kind::InvalidFen, "{}", fen);
        }
    }

    #[test]
    fn moves_parse_as_uci_or_san()
    {
        let _setup = setup::setup();
        let board = Board::default();

        let uci = board.parse_move("g1f3").unwrap();
        let san = board.parse_move("Nf3").unwrap();
        let check = board.parse_move(" e4 ").unwrap();
        assert_eq!(uci, san);
        assert_eq!(board.move_text(&san), "g1f3");
        assert_eq!(board.move_text(&check), "e2e4");

        for text in ["e2e5", "Nf6", "O-O", "", "hello"]
        {
            assert_eq!(board.parse_move(text).unwrap_err().kind, Kind::InvalidMove, "{}", text);
        }
    }

    #[test]
    fn castling_is_written_king_to_destination()
    {
        let _setup = setup::setup();
        let board = templates::board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let mv = board.parse_move("O-O").unwrap();
        assert_eq!(board.move_text(&mv), "e1g1");
        assert_eq!(board.parse_move("e1g1").unwrap(), mv);
    }

    #[test]
    fn make_and_unmake_restore_the_position()
    {
        let _setup = setup::setup();
        let mut board = Board::default();
        let before = board.clone();

        for mv in board.legal_moves()
        {
            board.make(&mv).unwrap();
            assert_eq!(board.ply(), 1);
            assert_eq!(board.to_move(), Color::Black);
            board.unmake().unwrap();
            assert_eq!(board, before);
        }
    }

    #[test]
    fn undo_stack_is_bounded()
    {
        let _setup = setup::setup();
        let mut board = Board::default();
        let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];

        for i in 0..MAXIMUM_PLY
        {
            let mv = board.parse_move(shuffle[i % shuffle.len()]).unwrap();
            board.make(&mv).unwrap();
        }
        assert_eq!(board.ply(), MAXIMUM_PLY);

        let mv = board.parse_move("g1f3").unwrap();
        assert_eq!(board.make(&mv).unwrap_err().kind, Kind::TooManyMoves);

        for _ in 0..MAXIMUM_PLY
        {
            board.unmake().unwrap();
        }
        assert_eq!(board, Board::default());
        assert_eq!(board.unmake().unwrap_err().kind, Kind::TooManyUndos);
    }

    #[test]
    fn play_refuses_illegal_moves_and_mid_search_calls()
    {
        let _setup = setup::setup();
        let mut board = Board::default();

        let mv = board.parse_move("e2e4").unwrap();
        board.make(&mv).unwrap();
        let reply = board.parse_move("e7e5").unwrap();
        assert_eq!(board.play(&reply).unwrap_err().kind, Kind::PleaseOpenAGithubIssue);
        board.unmake().unwrap();

        // A black move is not legal with white to move.
        assert_eq!(board.play(&reply).unwrap_err().kind, Kind::InvalidMove);
        assert_eq!(board, Board::default());

        assert_eq!(board.play_text("e4").unwrap(), mv);
        assert_eq!(board.ply(), 0);
        assert_eq!(board.to_move(), Color::Black);
    }

    #[test]
    fn states_are_classified()
    {
        let _setup = setup::setup();
        let cases = [
            (templates::WHITE_IS_MATED, GameState::Checkmate, Some("0-1")),
            (templates::BLACK_IS_MATED, GameState::Checkmate, Some("1-0")),
            (templates::STALEMATE, GameState::Stalemate, Some("1/2-1/2")),
            ("8/8/4k3/8/8/4K3/8/8 w - - 0 1", GameState::InsufficientMaterial, Some("1/2-1/2")),
            ("8/8/4k3/8/8/4K3/8/R7 w - - 150 100", GameState::SeventyFiveMoves, Some("1/2-1/2")),
            ("8/8/4k3/8/8/4K3/8/R7 w - - 149 100", GameState::InProgress, None),
        ];

        for (fen, state, result) in cases
        {
            let board = templates::board(fen);
            assert_eq!(board.state(), state, "{}", fen);
            assert_eq!(board.is_over(), state.is_over());
            assert_eq!(board.outcome().map(|o| o.to_string()).as_deref(), result, "{}", fen);
        }
        assert!(GameState::Stalemate.is_draw());
        assert!(!GameState::Checkmate.is_draw());
    }

    #[test]
    fn states_parse_back()
    {
        let _setup = setup::setup();
        for state in [GameState::InProgress, GameState::Checkmate, GameState::SeventyFiveMoves]
        {
            assert_eq!(state.to_string().parse::<GameState>().unwrap(), state);
        }
        assert_eq!("Resigned".parse::<GameState>().unwrap_err().kind, Kind::ParseError);
    }

    #[test]
    fn keys_ignore_rights_and_clocks()
    {
        let _setup = setup::setup();
        let a = templates::board("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let b = templates::board("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 12 40");
        let c = templates::board("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");

        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
        assert_eq!(a.key().as_str(), templates::START_KEY);
        assert_eq!(c.key().to_move(), Color::Black);
        assert_eq!(c.key().placement(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    }

    #[test]
    fn keys_parse_strictly()
    {
        let _setup = setup::setup();
        let key = templates::START_KEY.parse::<PositionKey>().unwrap();
        assert_eq!(key, Board::default().key());
        assert_eq!(key.to_move(), Color::White);

        for text in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR_true",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP_True",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX_False",
        ]
        {
            assert_eq!(text.parse::<PositionKey>().unwrap_err().kind, Kind::ParseError, "{}", text);
        }
    }

    #[test]
    fn evaluation_is_for_the_side_to_move()
    {
        let _setup = setup::setup();
        let evaluator = MaterialEvaluator;

        assert_eq!(evaluator.evaluate(&Board::default()), DRAW);

        let white = templates::board("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
        let black = templates::board("4k3/8/8/8/8/8/8/3QK3 b - - 0 1");
        assert!((evaluator.evaluate(&white) - 9.2).abs() < 1e-9);
        assert!((evaluator.evaluate(&black) + 9.2).abs() < 1e-9);
    }

    #[test]
    fn evaluation_of_finished_games()
    {
        let _setup = setup::setup();
        let evaluator = MaterialEvaluator;

        assert_eq!(evaluator.evaluate(&templates::board(templates::WHITE_IS_MATED)), -MATE);
        assert_eq!(evaluator.evaluate(&templates::board(templates::BLACK_IS_MATED)), -MATE);
        assert_eq!(evaluator.evaluate(&templates::board(templates::STALEMATE)), DRAW);
        assert!(is_mate(-MATE));
        assert!(!is_mate(9.2));
    }

    #[test]
    fn seventy_five_move_positions_keep_their_material()
    {
        let _setup = setup::setup();
        let evaluator = MaterialEvaluator;

        let white = templates::board("8/8/4k3/8/8/4K3/8/R7 w - - 150 100");
        let black = templates::board("8/8/4k3/8/8/4K3/8/R7 b - - 150 100");
        assert_eq!(white.state(), GameState::SeventyFiveMoves);
        assert!((evaluator.evaluate(&white) - 5.0).abs() < 1e-9);
        assert!((evaluator.evaluate(&black) + 5.0).abs() < 1e-9);

        // The game is over, so the search scores it without looking further.
        let mut board = white.clone();
        let mut search = Search::new(&evaluator);
        let line = search.run(&mut board, Depth::new(2)).unwrap();
        assert!(line.best().is_none());
        assert!((line.score - 5.0).abs() < 1e-9);
        assert_eq!(search.stats().leaves, 1);
    }
}
