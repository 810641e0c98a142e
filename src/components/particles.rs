use std::f64::consts::TAU;
use std::rc::Rc;

use yew::prelude::*;

pub const BURST_DURATION_MS: u32 = 900;
pub const FRAME_MS: u32 = 30;
/// Particles each origin emits on the first frame.
pub const PEAK_PER_ORIGIN: u32 = 12;
const SPREAD_PX: f64 = 90.0;

/// Emission points as percentages of the card box, mirrored about its
/// vertical centerline.
pub const ORIGINS: [(f64, f64); 2] = [(25.0, 50.0), (75.0, 50.0)];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub origin_x: f64,
    pub origin_y: f64,
    pub dx: f64,
    pub dy: f64,
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; width: {s}px; height: {s}px; opacity: {:.3}; transform: translate({:.1}px, {:.1}px);",
            self.origin_x,
            self.origin_y,
            self.opacity,
            self.dx,
            self.dy,
            s = self.size,
        )
    }
}

/// One running burst on a manifesto card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Burst {
    pub card: usize,
    frame: u32,
}

impl Burst {
    pub fn start(card: usize) -> Self {
        Self { card, frame: 0 }
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.frame.saturating_mul(FRAME_MS)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms() >= BURST_DURATION_MS
    }

    /// The next frame, or `None` once the duration has run out.
    pub fn advance(self) -> Option<Self> {
        let next = Self {
            frame: self.frame + 1,
            ..self
        };
        (!next.is_finished()).then_some(next)
    }

    pub fn per_origin(&self) -> u32 {
        let remaining = BURST_DURATION_MS.saturating_sub(self.elapsed_ms());
        PEAK_PER_ORIGIN * remaining / BURST_DURATION_MS
    }

    pub fn live_particles(&self) -> u32 {
        self.per_origin() * ORIGINS.len() as u32
    }

    pub fn particles(&self) -> Vec<Particle> {
        let progress = f64::from(self.elapsed_ms().min(BURST_DURATION_MS)) / f64::from(BURST_DURATION_MS);
        let count = self.per_origin();
        let mut particles = Vec::with_capacity(self.live_particles() as usize);

        for (side, (origin_x, origin_y)) in ORIGINS.iter().copied().enumerate() {
            let mirror = if side == 0 { 1.0 } else { -1.0 };
            for i in 0..count {
                let angle = TAU * f64::from(i) / f64::from(PEAK_PER_ORIGIN) + 0.26;
                let reach = progress * SPREAD_PX * (0.6 + 0.1 * f64::from((i * 7) % 5));
                particles.push(Particle {
                    origin_x,
                    origin_y,
                    dx: mirror * angle.cos() * reach,
                    dy: angle.sin() * reach,
                    size: 4.0 + 2.0 * f64::from(i % 3),
                    opacity: 1.0 - progress,
                });
            }
        }
        particles
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BurstState {
    pub active: Option<Burst>,
}

pub enum BurstAction {
    Start(usize),
    Tick,
}

impl BurstState {
    pub fn active_card(&self) -> Option<usize> {
        self.active.map(|burst| burst.card)
    }

    pub fn on_card(&self, card: usize) -> Option<Burst> {
        self.active.filter(|burst| burst.card == card)
    }
}

impl Reducible for BurstState {
    type Action = BurstAction;

    fn reduce(self: Rc<Self>, action: BurstAction) -> Rc<Self> {
        let active = match action {
            BurstAction::Start(card) => Some(Burst::start(card)),
            BurstAction::Tick => match self.active {
                Some(burst) => burst.advance(),
                None => return self,
            },
        };
        Rc::new(Self { active })
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticleBurstProps {
    pub burst: Burst,
}

#[function_component(ParticleBurst)]
pub fn particle_burst(props: &ParticleBurstProps) -> Html {
    html! {
        <div class="particle-layer" aria-hidden="true">
            { for props.burst.particles().iter().map(|particle| html! {
                <span class="particle" style={particle.style()}></span>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(card: usize) -> Vec<Burst> {
        std::iter::successors(Some(Burst::start(card)), |burst| burst.advance()).collect()
    }

    #[test]
    fn starts_at_peak_and_runs_for_the_full_duration() {
        let frames = run(0);
        assert_eq!(frames[0].live_particles(), PEAK_PER_ORIGIN * 2);
        assert_eq!(frames.len() as u32, BURST_DURATION_MS / FRAME_MS);
        assert!(frames.last().unwrap().elapsed_ms() < BURST_DURATION_MS);
        assert_eq!(frames.last().unwrap().advance(), None);
    }

    #[test]
    fn count_decays_linearly_and_never_grows() {
        let frames = run(1);
        for pair in frames.windows(2) {
            assert!(pair[1].live_particles() <= pair[0].live_particles());
        }
        let half = frames
            .iter()
            .find(|burst| burst.elapsed_ms() * 2 == BURST_DURATION_MS)
            .unwrap();
        assert_eq!(half.per_origin(), PEAK_PER_ORIGIN / 2);
    }

    #[test]
    fn nothing_left_once_duration_elapses() {
        let spent = Burst { card: 0, frame: BURST_DURATION_MS / FRAME_MS };
        assert!(spent.is_finished());
        assert_eq!(spent.live_particles(), 0);
        assert!(spent.particles().is_empty());
    }

    #[test]
    fn origins_emit_mirrored_particles() {
        let burst = Burst { card: 2, frame: 10 };
        let particles = burst.particles();
        let (left, right) = particles.split_at(particles.len() / 2);
        assert_eq!(left.len(), right.len());
        for (l, r) in left.iter().zip(right) {
            assert!((l.dx + r.dx).abs() < 1e-9);
            assert!((l.dy - r.dy).abs() < 1e-9);
            assert!((l.origin_x - 50.0 + (r.origin_x - 50.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn hovering_another_card_restarts_the_burst() {
        let state = Rc::new(BurstState::default()).reduce(BurstAction::Start(0));
        let state = state.reduce(BurstAction::Tick).reduce(BurstAction::Tick);
        assert_eq!(state.active.unwrap().elapsed_ms(), 2 * FRAME_MS);

        let state = state.reduce(BurstAction::Start(3));
        assert_eq!(state.active_card(), Some(3));
        assert_eq!(state.on_card(3).unwrap().elapsed_ms(), 0);
        assert_eq!(state.on_card(0), None);
    }

    #[test]
    fn ticking_past_the_end_clears_the_burst() {
        let mut state = Rc::new(BurstState::default()).reduce(BurstAction::Start(0));
        for _ in 0..BURST_DURATION_MS / FRAME_MS {
            state = state.reduce(BurstAction::Tick);
        }
        assert_eq!(state.active, None);

        let idle = Rc::clone(&state).reduce(BurstAction::Tick);
        assert!(Rc::ptr_eq(&state, &idle));
    }
}
