mod test_wide_moves;
