use crate::grid::Walls;
use crate::snake::Snake;

/// True when the head sits on another segment or on a wall.
pub fn check_game_over(snake: &Snake, walls: &Walls) -> bool {
    let head = snake.head();
    hits_itself(snake) || walls.contains(head)
}

pub fn hits_itself(snake: &Snake) -> bool {
    let head = snake.head();
    snake.body().rev().skip(1).any(|pos| *pos == head)
}
