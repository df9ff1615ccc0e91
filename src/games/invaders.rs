//! Space Invaders: a marching formation, bullets both ways, levels.
//!
//! Timing is counted in ticks (`GAME_TICK_MS` each) so the whole game
//! advances deterministically from `tick`.

use rand::Rng;

use super::Rect;

pub const WIDTH: f64 = 500.0;
pub const HEIGHT: f64 = 400.0;
pub const PLAYER_WIDTH: f64 = 32.0;
pub const PLAYER_HEIGHT: f64 = 24.0;
pub const ENEMY_WIDTH: f64 = 24.0;
pub const ENEMY_HEIGHT: f64 = 16.0;
pub const BULLET_WIDTH: f64 = 3.0;
pub const BULLET_HEIGHT: f64 = 8.0;

const PLAYER_Y: f64 = HEIGHT - 50.0;
const PLAYER_SPEED: f64 = 3.0;
const PLAYER_BULLET_SPEED: f64 = 5.0;
const ENEMY_BULLET_SPEED: f64 = 3.0;
const ENEMY_STEP_X: f64 = 8.0;
const ENEMY_STEP_Y: f64 = 20.0;
const EDGE_MARGIN: f64 = 10.0;
const FORMATION_TOP: f64 = 60.0;
const FORMATION_SPACING: f64 = 32.0;
const STARTING_LIVES: u32 = 3;
/// Ticks between shots (~200 ms).
const FIRE_COOLDOWN_TICKS: u32 = 12;
/// Ticks the level banner is shown before play (~2 s).
pub const LEVEL_START_TICKS: u32 = 125;

/// Held movement keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvadersPhase {
    /// Level banner; counts down to play.
    LevelStart { ticks_left: u32 },
    Playing,
    LevelComplete,
    GameOver,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Invaders {
    pub player_x: f64,
    pub player_bullets: Vec<Rect>,
    pub enemy_bullets: Vec<Rect>,
    pub enemies: Vec<Rect>,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub phase: InvadersPhase,
    pub paused: bool,
    direction: f64,
    move_timer: u32,
    cooldown: u32,
}

impl Default for Invaders {
    fn default() -> Self {
        Self::at_level(1)
    }
}

impl Invaders {
    fn at_level(level: u32) -> Self {
        Self {
            player_x: (WIDTH - PLAYER_WIDTH) / 2.0,
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            enemies: formation(level),
            score: 0,
            lives: STARTING_LIVES,
            level,
            phase: InvadersPhase::LevelStart {
                ticks_left: LEVEL_START_TICKS,
            },
            paused: false,
            direction: 1.0,
            move_timer: 0,
            cooldown: 0,
        }
    }

    pub fn player(&self) -> Rect {
        Rect::new(self.player_x, PLAYER_Y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Shoot from the ship, subject to the fire cooldown.
    pub fn fire(&mut self) {
        if self.paused || self.phase != InvadersPhase::Playing || self.cooldown > 0 {
            return;
        }
        let ship = self.player();
        self.player_bullets.push(Rect::new(
            ship.center_x() - BULLET_WIDTH / 2.0,
            ship.y - 5.0,
            BULLET_WIDTH,
            BULLET_HEIGHT,
        ));
        self.cooldown = FIRE_COOLDOWN_TICKS;
    }

    /// Enter: next level after a clear, full restart after game over.
    pub fn advance(&mut self) {
        match self.phase {
            InvadersPhase::LevelComplete => {
                let (score, lives, level) = (self.score, self.lives, self.level + 1);
                *self = Self::at_level(level);
                self.score = score;
                self.lives = lives;
            }
            InvadersPhase::GameOver => *self = Self::default(),
            InvadersPhase::LevelStart { .. } | InvadersPhase::Playing => {}
        }
    }

    /// One fixed step. Pausing suspends everything, including the banner.
    pub fn tick<R: Rng + ?Sized>(&mut self, controls: Controls, rng: &mut R) {
        if self.paused {
            return;
        }
        match self.phase {
            InvadersPhase::LevelStart { ticks_left } => {
                self.phase = match ticks_left.saturating_sub(1) {
                    0 => InvadersPhase::Playing,
                    left => InvadersPhase::LevelStart { ticks_left: left },
                };
                return;
            }
            InvadersPhase::LevelComplete | InvadersPhase::GameOver => return,
            InvadersPhase::Playing => {}
        }

        self.cooldown = self.cooldown.saturating_sub(1);
        self.move_player(controls);
        self.move_bullets();

        self.move_timer += 1;
        if self.move_timer >= enemy_move_interval(self.enemies.len(), self.level) {
            self.move_timer = 0;
            self.march();
            self.enemy_fire(rng);
        }

        self.resolve_hits();
    }

    fn move_player(&mut self, controls: Controls) {
        if controls.left {
            self.player_x -= PLAYER_SPEED;
        }
        if controls.right {
            self.player_x += PLAYER_SPEED;
        }
        self.player_x = self.player_x.clamp(0.0, WIDTH - PLAYER_WIDTH);
    }

    fn move_bullets(&mut self) {
        for bullet in &mut self.player_bullets {
            bullet.y -= PLAYER_BULLET_SPEED;
        }
        self.player_bullets.retain(|b| b.y > 0.0);

        for bullet in &mut self.enemy_bullets {
            bullet.y += ENEMY_BULLET_SPEED;
        }
        self.enemy_bullets.retain(|b| b.y < HEIGHT);
    }

    /// Step the formation sideways, or down and reverse at an edge.
    fn march(&mut self) {
        if self.enemies.is_empty() {
            return;
        }
        let left = self.enemies.iter().map(|e| e.x).fold(f64::INFINITY, f64::min);
        let right = self
            .enemies
            .iter()
            .map(Rect::right)
            .fold(f64::NEG_INFINITY, f64::max);

        let at_edge = (self.direction > 0.0 && right >= WIDTH - EDGE_MARGIN)
            || (self.direction < 0.0 && left <= EDGE_MARGIN);
        if at_edge {
            for enemy in &mut self.enemies {
                enemy.y += ENEMY_STEP_Y;
            }
            self.direction = -self.direction;
        } else {
            for enemy in &mut self.enemies {
                enemy.x += self.direction * ENEMY_STEP_X;
            }
        }

        let lowest = self
            .enemies
            .iter()
            .map(Rect::bottom)
            .fold(f64::NEG_INFINITY, f64::max);
        if lowest >= PLAYER_Y - EDGE_MARGIN {
            self.lives = 0;
            self.phase = InvadersPhase::GameOver;
            tracing::debug!(score = self.score, "formation reached the ship");
        }
    }

    /// Maybe shoot from a random enemy with nothing below it.
    fn enemy_fire<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.phase != InvadersPhase::Playing || !rng.gen_bool(enemy_fire_chance(self.level)) {
            return;
        }
        let shooters: Vec<&Rect> = self
            .enemies
            .iter()
            .filter(|e| {
                !self
                    .enemies
                    .iter()
                    .any(|other| other.x == e.x && other.y > e.y)
            })
            .collect();
        if shooters.is_empty() {
            return;
        }
        let shooter = shooters[rng.gen_range(0..shooters.len())];
        let bullet = Rect::new(
            shooter.center_x() - BULLET_WIDTH / 2.0,
            shooter.bottom(),
            BULLET_WIDTH,
            BULLET_HEIGHT,
        );
        self.enemy_bullets.push(bullet);
    }

    fn resolve_hits(&mut self) {
        if self.phase != InvadersPhase::Playing {
            return;
        }

        let level = self.level;
        let mut gained = 0;
        let enemies = &mut self.enemies;
        self.player_bullets.retain(|bullet| {
            match enemies.iter().position(|e| bullet.intersects(e)) {
                Some(hit) => {
                    enemies.remove(hit);
                    gained += 10 * level;
                    false
                }
                None => true,
            }
        });
        self.score += gained;

        let ship = self.player();
        if self.enemy_bullets.iter().any(|b| b.intersects(&ship)) {
            self.lives = self.lives.saturating_sub(1);
            self.enemy_bullets.clear();
            self.player_bullets.clear();
            if self.lives == 0 {
                self.phase = InvadersPhase::GameOver;
                tracing::debug!(score = self.score, "out of lives");
                return;
            }
        }

        if self.enemies.is_empty() {
            self.score += 100 * self.level;
            self.phase = InvadersPhase::LevelComplete;
        }
    }
}

/// Rows and columns grow with the level, centered horizontally.
fn formation(level: u32) -> Vec<Rect> {
    let rows = (3 + (level - 1) / 2).min(5);
    let cols = 8 + ((level - 1) / 3).min(2);
    let left = (WIDTH - f64::from(cols) * FORMATION_SPACING) / 2.0;

    (0..rows)
        .flat_map(|row| {
            (0..cols).map(move |col| {
                Rect::new(
                    left + f64::from(col) * FORMATION_SPACING,
                    FORMATION_TOP + f64::from(row) * (ENEMY_HEIGHT + 12.0),
                    ENEMY_WIDTH,
                    ENEMY_HEIGHT,
                )
            })
        })
        .collect()
}

/// Ticks between formation steps: faster with level and with fewer enemies.
fn enemy_move_interval(enemy_count: usize, level: u32) -> u32 {
    let base = 30u32.saturating_sub(level * 2).max(8);
    let boost = (50u32.saturating_sub(enemy_count as u32) / 5).max(1);
    base.saturating_sub(boost).max(3)
}

fn enemy_fire_chance(level: u32) -> f64 {
    (0.005 + f64::from(level.saturating_sub(1)) * 0.002).min(0.015)
}
