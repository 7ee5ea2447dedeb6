use std::env;

use macroquad::window::next_frame;

use lost_maze::game_app::App;

#[macroquad::main("Not found")]
async fn main() {
    // Optional seed for a reproducible maze.
    let seed = env::args().nth(1).and_then(|arg| arg.parse().ok());
    let mut app = App::new(seed);
    while app.tick() {
        next_frame().await;
    }
}
