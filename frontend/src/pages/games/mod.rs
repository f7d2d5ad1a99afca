pub mod frontend_twister_game;
