//! Fixed-step paddle game simulation.
//!
//! Coordinates are field pixels with the origin at the top-left corner. The human paddle sits on
//! the left edge, the CPU paddle on the right.

pub(crate) const FIELD_WIDTH: f64 = 240.0;
pub(crate) const FIELD_HEIGHT: f64 = 180.0;
pub(crate) const PADDLE_WIDTH: f64 = 8.0;
pub(crate) const PADDLE_HEIGHT: f64 = 40.0;
pub(crate) const PADDLE_INSET: f64 = 10.0;
pub(crate) const BALL_SIZE: f64 = 8.0;
const PADDLE_SPEED: f64 = 4.0;
const INITIAL_BALL_SPEED: f64 = 3.0;
const PADDLE_HIT_SPEEDUP: f64 = 1.05;
const CPU_SPEED_FACTOR: f64 = 0.7;
const CPU_DEAD_ZONE: f64 = 5.0;

/// Ball x at or beyond which the left paddle can return it.
const LEFT_CONTACT_X: f64 = PADDLE_WIDTH + PADDLE_INSET;
/// Ball x at or beyond which the right paddle can return it.
const RIGHT_CONTACT_X: f64 = FIELD_WIDTH - PADDLE_WIDTH - BALL_SIZE - PADDLE_INSET;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum GameStatus {
    #[default]
    NotStarted,
    Running,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Player,
    Cpu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct PaddleInput {
    pub(crate) up: bool,
    pub(crate) down: bool,
}

/// Xorshift64 generator; serve angles only need to look random.
#[derive(Debug, Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        (x >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PongGame {
    pub(crate) player_y: f64,
    pub(crate) cpu_y: f64,
    pub(crate) ball_x: f64,
    pub(crate) ball_y: f64,
    pub(crate) vel_x: f64,
    pub(crate) vel_y: f64,
    pub(crate) player_score: u32,
    pub(crate) cpu_score: u32,
    pub(crate) status: GameStatus,
    rng: Rng,
}

fn centered_paddle() -> f64 {
    FIELD_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0
}

fn clamp_paddle(y: f64) -> f64 {
    y.clamp(0.0, FIELD_HEIGHT - PADDLE_HEIGHT)
}

impl PongGame {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            player_y: centered_paddle(),
            cpu_y: centered_paddle(),
            ball_x: FIELD_WIDTH / 2.0 - BALL_SIZE / 2.0,
            ball_y: FIELD_HEIGHT / 2.0 - BALL_SIZE / 2.0,
            vel_x: INITIAL_BALL_SPEED,
            vel_y: INITIAL_BALL_SPEED * 0.5,
            player_score: 0,
            cpu_score: 0,
            status: GameStatus::NotStarted,
            rng: Rng::new(seed),
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Space/Escape: starts a fresh game or toggles pause.
    pub(crate) fn toggle(&mut self) {
        self.status = match self.status {
            GameStatus::NotStarted | GameStatus::Paused => GameStatus::Running,
            GameStatus::Running => GameStatus::Paused,
        };
    }

    pub(crate) fn start(&mut self) {
        if self.status == GameStatus::NotStarted {
            self.status = GameStatus::Running;
        }
    }

    pub(crate) fn reset(&mut self) {
        let rng = self.rng.clone();
        *self = Self {
            rng,
            ..Self::new(1)
        };
        self.serve(1.0);
    }

    /// Centers the human paddle on `ratio` (0 = top, 1 = bottom) of the field height.
    pub(crate) fn aim_player(&mut self, ratio: f64) {
        if !self.is_running() {
            return;
        }
        self.player_y = clamp_paddle(ratio * FIELD_HEIGHT - PADDLE_HEIGHT / 2.0);
    }

    fn serve(&mut self, direction: f64) {
        self.ball_x = FIELD_WIDTH / 2.0 - BALL_SIZE / 2.0;
        self.ball_y = FIELD_HEIGHT / 2.0 - BALL_SIZE / 2.0;
        self.vel_x = INITIAL_BALL_SPEED * direction;
        self.vel_y = (self.rng.next_f64() - 0.5) * INITIAL_BALL_SPEED;
    }

    fn return_angle(&self, paddle_top: f64) -> f64 {
        let ball_center = self.ball_y + BALL_SIZE / 2.0;
        let hit_pos = (ball_center - paddle_top) / PADDLE_HEIGHT;
        (hit_pos - 0.5) * INITIAL_BALL_SPEED * 2.0
    }

    fn ball_meets(&self, paddle_top: f64) -> bool {
        let ball_center = self.ball_y + BALL_SIZE / 2.0;
        ball_center >= paddle_top && ball_center <= paddle_top + PADDLE_HEIGHT
    }

    /// Advances one fixed tick. Returns the side that scored, if any.
    pub(crate) fn step(&mut self, input: PaddleInput) -> Option<Side> {
        if !self.is_running() {
            return None;
        }

        if input.up {
            self.player_y = clamp_paddle(self.player_y - PADDLE_SPEED);
        } else if input.down {
            self.player_y = clamp_paddle(self.player_y + PADDLE_SPEED);
        }

        let diff = (self.ball_y + BALL_SIZE / 2.0) - (self.cpu_y + PADDLE_HEIGHT / 2.0);
        if diff.abs() > CPU_DEAD_ZONE {
            let speed = PADDLE_SPEED * CPU_SPEED_FACTOR;
            self.cpu_y = clamp_paddle(self.cpu_y + speed.copysign(diff));
        }

        self.ball_x += self.vel_x;
        self.ball_y += self.vel_y;
        if self.ball_y <= 0.0 {
            self.ball_y = 0.0;
            self.vel_y = self.vel_y.abs();
        } else if self.ball_y >= FIELD_HEIGHT - BALL_SIZE {
            self.ball_y = FIELD_HEIGHT - BALL_SIZE;
            self.vel_y = -self.vel_y.abs();
        }

        if self.ball_x <= LEFT_CONTACT_X && self.ball_x > 0.0 && self.ball_meets(self.player_y) {
            self.vel_x = self.vel_x.abs() * PADDLE_HIT_SPEEDUP;
            self.vel_y = self.return_angle(self.player_y);
            self.ball_x = LEFT_CONTACT_X + 1.0;
            return None;
        }

        if self.ball_x >= RIGHT_CONTACT_X
            && self.ball_x < FIELD_WIDTH - BALL_SIZE
            && self.ball_meets(self.cpu_y)
        {
            self.vel_x = -self.vel_x.abs() * PADDLE_HIT_SPEEDUP;
            self.vel_y = self.return_angle(self.cpu_y);
            self.ball_x = RIGHT_CONTACT_X - 1.0;
            return None;
        }

        if self.ball_x <= 0.0 {
            self.cpu_score += 1;
            self.serve(1.0);
            return Some(Side::Cpu);
        }
        if self.ball_x >= FIELD_WIDTH - BALL_SIZE {
            self.player_score += 1;
            self.serve(-1.0);
            return Some(Side::Player);
        }
        None
    }
}
