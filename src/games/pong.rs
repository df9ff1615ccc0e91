//! Pong: mouse-driven left paddle against a tracking AI paddle.

use rand::Rng;

use super::Rect;

pub const WIDTH: f64 = 600.0;
pub const HEIGHT: f64 = 400.0;
pub const PADDLE_WIDTH: f64 = 10.0;
pub const PADDLE_HEIGHT: f64 = 80.0;
pub const BALL_SIZE: f64 = 10.0;
const AI_SPEED: f64 = 4.0;
const SERVE_SPEED: (f64, f64) = (5.0, 3.0);
/// Maximum vertical velocity change per paddle hit.
const SPIN: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Pong {
    pub player_y: f64,
    pub ai_y: f64,
    pub ball: Rect,
    pub vel_x: f64,
    pub vel_y: f64,
    pub player_score: u32,
    pub ai_score: u32,
    pub running: bool,
}

impl Default for Pong {
    fn default() -> Self {
        Self {
            player_y: (HEIGHT - PADDLE_HEIGHT) / 2.0,
            ai_y: (HEIGHT - PADDLE_HEIGHT) / 2.0,
            ball: centered_ball(),
            vel_x: SERVE_SPEED.0,
            vel_y: SERVE_SPEED.1,
            player_score: 0,
            ai_score: 0,
            running: false,
        }
    }
}

fn centered_ball() -> Rect {
    Rect::new(
        (WIDTH - BALL_SIZE) / 2.0,
        (HEIGHT - BALL_SIZE) / 2.0,
        BALL_SIZE,
        BALL_SIZE,
    )
}

impl Pong {
    pub fn player_paddle(&self) -> Rect {
        Rect::new(0.0, self.player_y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    pub fn ai_paddle(&self) -> Rect {
        Rect::new(WIDTH - PADDLE_WIDTH, self.ai_y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Center the player paddle on the pointer's y (canvas coordinates).
    pub fn track_pointer(&mut self, y: f64) {
        self.player_y = clamp_paddle(y - PADDLE_HEIGHT / 2.0);
    }

    /// One fixed step. Does nothing while stopped.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.running {
            return;
        }

        self.ball.x += self.vel_x;
        self.ball.y += self.vel_y;

        if self.ball.y <= 0.0 {
            self.ball.y = 0.0;
            self.vel_y = self.vel_y.abs();
        } else if self.ball.bottom() >= HEIGHT {
            self.ball.y = HEIGHT - BALL_SIZE;
            self.vel_y = -self.vel_y.abs();
        }

        if self.vel_x < 0.0 && self.ball.intersects(&self.player_paddle()) {
            self.ball.x = PADDLE_WIDTH;
            self.vel_x = -self.vel_x;
            self.vel_y += rng.gen_range(-SPIN..=SPIN);
        } else if self.vel_x > 0.0 && self.ball.intersects(&self.ai_paddle()) {
            self.ball.x = WIDTH - PADDLE_WIDTH - BALL_SIZE;
            self.vel_x = -self.vel_x;
            self.vel_y += rng.gen_range(-SPIN..=SPIN);
        }

        if self.ball.right() < 0.0 {
            self.ai_score += 1;
            self.serve(1.0);
        } else if self.ball.x > WIDTH {
            self.player_score += 1;
            self.serve(-1.0);
        }

        let ai_center = self.ai_y + PADDLE_HEIGHT / 2.0;
        if ai_center < self.ball.center_y() {
            self.ai_y += AI_SPEED;
        } else {
            self.ai_y -= AI_SPEED;
        }
        self.ai_y = clamp_paddle(self.ai_y);
    }

    /// Back to the start position with zero scores, stopped.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Ball back to the center, heading in `direction` (±1).
    fn serve(&mut self, direction: f64) {
        self.ball = centered_ball();
        self.vel_x = SERVE_SPEED.0 * direction;
        self.vel_y = SERVE_SPEED.1;
    }
}

fn clamp_paddle(y: f64) -> f64 {
    y.clamp(0.0, HEIGHT - PADDLE_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn running() -> Pong {
        Pong {
            running: true,
            ..Pong::default()
        }
    }

    #[test]
    fn test_stopped_game_does_not_move() {
        let mut game = Pong::default();
        let before = game.clone();
        game.tick(&mut StdRng::seed_from_u64(0));
        assert_eq!(game, before);
    }

    #[test]
    fn test_wall_bounce() {
        let mut game = running();
        game.ball.y = 1.0;
        game.vel_y = -3.0;
        game.tick(&mut StdRng::seed_from_u64(0));
        assert!(game.vel_y > 0.0);
        assert!(game.ball.y >= 0.0);
    }

    #[test]
    fn test_player_paddle_returns_ball() {
        let mut game = running();
        game.player_y = 150.0;
        game.ball = Rect::new(12.0, 180.0, BALL_SIZE, BALL_SIZE);
        game.vel_x = -5.0;
        game.vel_y = 0.0;
        game.tick(&mut StdRng::seed_from_u64(4));
        assert!(game.vel_x > 0.0);
        assert!(game.vel_y.abs() <= SPIN);
        assert_eq!(game.ball.x, PADDLE_WIDTH);
    }

    #[test]
    fn test_miss_scores_for_ai_and_serves() {
        let mut game = running();
        game.player_y = 0.0;
        game.ball = Rect::new(-8.0, 350.0, BALL_SIZE, BALL_SIZE);
        game.vel_x = -5.0;
        game.vel_y = 0.0;
        game.tick(&mut StdRng::seed_from_u64(0));
        assert_eq!(game.ai_score, 1);
        assert_eq!(game.ball, centered_ball());
        assert!(game.vel_x > 0.0);
    }

    #[test]
    fn test_ai_tracks_ball_within_bounds() {
        let mut game = running();
        game.ai_y = HEIGHT - PADDLE_HEIGHT;
        game.ball = Rect::new(300.0, 390.0, BALL_SIZE, BALL_SIZE);
        game.vel_y = 0.0;
        game.tick(&mut StdRng::seed_from_u64(0));
        assert_eq!(game.ai_y, HEIGHT - PADDLE_HEIGHT);
    }

    #[test]
    fn test_track_pointer_clamps() {
        let mut game = Pong::default();
        game.track_pointer(-50.0);
        assert_eq!(game.player_y, 0.0);
        game.track_pointer(1000.0);
        assert_eq!(game.player_y, HEIGHT - PADDLE_HEIGHT);
    }
}
