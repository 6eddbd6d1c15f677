#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;
    use std::time::Duration;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use seabattle::{
        coord_to_string, parse_coord, write_board, CliDriver, FleetSpec, GameSession, Grid,
        Orientation, Phase,
    };

    fn session(seed: u64) -> GameSession {
        GameSession::new_game(10, FleetSpec::standard(), SmallRng::seed_from_u64(seed)).unwrap()
    }

    fn driver(script: String) -> CliDriver<Cursor<Vec<u8>>, Vec<u8>> {
        CliDriver::new(Cursor::new(script.into_bytes()), Vec::new()).with_pause(Duration::ZERO)
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("A1", 10), Ok((0, 0)));
        assert_eq!(parse_coord("j10", 10), Ok((9, 9)));
        assert_eq!(parse_coord("C7", 8), Ok((6, 2)));
        assert!(parse_coord("K1", 10).is_err());
        assert!(parse_coord("A0", 10).is_err());
        assert!(parse_coord("A11", 10).is_err());
        assert!(parse_coord("5A", 10).is_err());
        assert!(parse_coord("A", 10).is_err());
        assert_eq!(coord_to_string(9, 9), "J10");
        assert_eq!(coord_to_string(0, 2), "C1");
    }

    #[test]
    fn test_write_board_hides_ships() {
        let mut grid = Grid::new(6).unwrap();
        grid.set(0, 0, seabattle::CellState::Ship).unwrap();
        grid.set(1, 1, seabattle::CellState::Hit).unwrap();

        let mut hidden = Vec::new();
        write_board(&mut hidden, &grid, false).unwrap();
        let hidden = String::from_utf8(hidden).unwrap();
        assert!(hidden.starts_with("    A B C D E F\n"));
        assert!(hidden.contains(" 1  . . . . . .\n"));
        assert!(hidden.contains(" 2  . X . . . .\n"));

        let mut shown = Vec::new();
        write_board(&mut shown, &grid, true).unwrap();
        assert!(String::from_utf8(shown).unwrap().contains(" 1  S . . . . .\n"));
    }

    #[tokio::test]
    async fn test_quit_during_placement() {
        let mut s = session(1);
        let mut d = driver("B2 v\nq\n".to_string());
        assert_eq!(d.play(&mut s).await.unwrap(), None);
        assert_eq!(s.ships_placed(), 1);
        assert_eq!(s.phase(), Phase::Placement);
    }

    #[tokio::test]
    async fn test_rotate_and_reject_bad_input() {
        let mut s = session(2);
        let mut d = driver("r\nZ9\nA1 x\nA1\n".to_string());
        assert_eq!(d.play(&mut s).await.unwrap(), None);
        assert_eq!(s.pending_orientation(), Orientation::Vertical);
        // the four-decker went down the first column
        assert_eq!(s.player_fleet().get(3, 0), Ok(seabattle::CellState::Ship));
        let out = String::from_utf8(d.into_output()).unwrap();
        assert!(out.contains("Orientation: Vertical"));
        assert!(out.contains("out of bounds"));
        assert!(out.contains("Orientation must be 'h' or 'v'"));
    }

    #[tokio::test]
    async fn test_auto_then_end_of_input() {
        let mut s = session(3);
        let mut d = driver("auto\n".to_string());
        assert_eq!(d.play(&mut s).await.unwrap(), None);
        assert_eq!(s.phase(), Phase::PlayerTurn);
        let out = String::from_utf8(d.into_output()).unwrap();
        assert!(out.contains("All ships placed! Your turn."));
        assert!(out.contains("Fire at: "));
    }

    #[tokio::test]
    async fn test_full_game_to_the_end() {
        let mut s = session(4);
        let mut script = String::from("auto\n");
        // repeat the first shot to exercise the retry path
        script.push_str("A1\nA1\n");
        for r in 0..10 {
            for c in 0..10 {
                if (r, c) != (0, 0) {
                    script.push_str(&coord_to_string(r, c));
                    script.push('\n');
                }
            }
        }
        let mut d = driver(script);
        let winner = d.play(&mut s).await.unwrap();
        assert!(winner.is_some());
        assert_eq!(s.winner(), winner);
        let out = String::from_utf8(d.into_output()).unwrap();
        assert!(out.contains("GAME OVER"));
        assert!(out.contains("VICTORY!") || out.contains("DEFEAT."));
    }
}
