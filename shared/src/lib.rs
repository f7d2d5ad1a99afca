pub mod audio;
pub mod constants;
pub mod palette;
pub mod random;
pub mod settings;
pub mod shared_twister_game;
pub mod storage;
pub mod wheel_geometry;
