mod test {
    use Direction::*;
    use crate::core::*;
    use crate::puzzle::widen;
    use crate::console_interface::{parse_grid, render_grid_to_string};
    use crate::test::test_util::{assert_text_matches, WarehouseTestState};

    #[test]
    fn horizontal_push_moves_both_halves() {
        let mut game = WarehouseTestState::new("##@[][]..##");
        let update = game.assert_move(Right);

        assert_eq!(update, GameUpdate::Moved(GameChangeType::PlayerAndBoxMove { cells: 4 }));
        game.assert_matches("##.@[][].##");
        game.assert_move(Left);
        game.assert_blocked(Left);
        game.assert_matches("##@.[][].##");
    }

    #[test]
    fn stacked_pair_moves_down_as_one() {
        let mut game = WarehouseTestState::new(
            r#"
            .@..
            .[].
            .[].
            ....
            "#,
        );
        game.assert_move(Down);
        game.assert_matches(
            r#"
            ....
            .@..
            .[].
            .[].
            "#,
        );
    }

    #[test]
    fn stacked_pair_over_wall_is_blocked() {
        let mut game = WarehouseTestState::new(
            r#"
            .@..
            .[].
            .[].
            ..#.
            "#,
        );
        game.assert_blocked(Down);
    }

    #[test]
    fn pushing_right_half_moves_left_half() {
        let mut game = WarehouseTestState::new(
            r#"
            ######
            #..@.#
            #.[].#
            #....#
            ######
            "#,
        );
        game.assert_move(Down);
        game.assert_matches(
            r#"
            ######
            #....#
            #..@.#
            #.[].#
            ######
            "#,
        );
    }

    #[test]
    fn staggered_boxes_fan_out() {
        let mut game = WarehouseTestState::new(
            r#"
            ##########
            ##.......#
            ##...@...#
            ##...[]..#
            ##..[][].#
            ##.......#
            ##########
            "#,
        );
        let update = game.assert_move(Down);

        assert_eq!(update, GameUpdate::Moved(GameChangeType::PlayerAndBoxMove { cells: 6 }));
        game.assert_matches(
            r#"
            ##########
            ##.......#
            ##.......#
            ##...@...#
            ##...[]..#
            ##..[][].#
            ##########
            "#,
        );
        game.assert_blocked(Down);
    }

    #[test]
    fn one_blocked_branch_blocks_the_whole_cluster() {
        let mut game = WarehouseTestState::new(
            r#"
            ##########
            ##...@...#
            ##...[]..#
            ##..[][].#
            ##.....###
            ##########
            "#,
        );
        game.assert_blocked(Down);
        game.assert_matches(
            r#"
            ##########
            ##...@...#
            ##...[]..#
            ##..[][].#
            ##.....###
            ##########
            "#,
        );
    }

    #[test]
    fn diamond_cluster_shares_middle_box() {
        let mut game = WarehouseTestState::new(
            r#"
            ########
            #...@..#
            #...[].#
            #..[][]#
            #...[].#
            #......#
            ########
            "#,
        );
        game.assert_move(Down);
        game.assert_matches(
            r#"
            ########
            #......#
            #...@..#
            #...[].#
            #..[][]#
            #...[].#
            ########
            "#,
        );
        game.warehouse.check_invariants().unwrap();
    }

    #[test]
    fn small_wide_example_moves() {
        let narrow = parse_grid(
            r#"
            #######
            #...#.#
            #.....#
            #..OO@#
            #..O..#
            #.....#
            #######
            "#,
        )
        .unwrap();
        let wide = widen(&narrow).unwrap();
        assert_text_matches(
            r#"
            ##############
            ##......##..##
            ##..........##
            ##....[][]@.##
            ##....[]....##
            ##..........##
            ##############
            "#,
            &render_grid_to_string(&wide),
        );

        let mut game = WarehouseTestState { warehouse: Warehouse::new(wide).unwrap() };
        game.try_moves(&[Left, Down, Down, Left, Left, Up, Up, Left, Left, Up, Up]);
        game.assert_matches(
            r#"
            ##############
            ##...[].##..##
            ##...@.[]...##
            ##....[]....##
            ##..........##
            ##..........##
            ##############
            "#,
        );
    }
}
