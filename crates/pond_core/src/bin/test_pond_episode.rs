// Full pond episode smoke run: patrol, hunt, aggro, bubbles, verdict.
// Run with: cargo run --bin test_pond_episode --release
//
// Drives every agent against the reference playfield for up to ten minutes
// of pond time and prints periodic JSON snapshots plus a final check table.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use pond_core::engine::playfield::{contact_events, scatter_flies, Obstacle, PlayBody, Playfield};
use pond_core::engine::steering;
use pond_core::engine::timestep::TICK_DT;
use pond_core::{
    AgentId, BiteOutcome, ContactKind, Frog, FrogConfig, MatchVerdict, PatrolRoute, PhysicsBody,
    Snake, SnakeConfig, SnakeState, Vec2,
};

const SEED: u64 = 42;
const POND_HALF_EXTENTS: Vec2 = Vec2::new(10.0, 6.0);
const FLY_COUNT: usize = 12;
const FLY_SPEED: f32 = 1.5;
const FLY_ACCEL: f32 = 4.0;
const FLY_ACCEL_TIME: f32 = 0.3;
const BUBBLE_LIFETIME_TICKS: u32 = 50;
const MAX_TICKS: u32 = 30_000;

const SNAKE_ID: AgentId = AgentId(1);
const FROG_ID: AgentId = AgentId(2);
const BUBBLE_ID: AgentId = AgentId(3);

#[derive(Serialize)]
struct TickSnapshot {
    tick: u32,
    snake_state: &'static str,
    snake_pos: Vec2,
    frog_pos: Vec2,
    frog_health: u32,
    flies_eaten: u32,
    flies_left: usize,
}

#[derive(Default)]
struct EpisodeStats {
    ticks: u32,
    state_changes: u32,
    bites: u32,
    bubbles_fired: u32,
    bubbles_popped: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🐸 Pond episode smoke run (seed {})\n", SEED);

    // wall dead center on the patrol line, plus a rock up north for the flies
    let field = Playfield::new(vec![
        Obstacle::circle(Vec2::new(0.0, 0.0), 1.0),
        Obstacle::circle(Vec2::new(5.0, 4.0), 0.8),
    ]);

    let route = PatrolRoute { home: Vec2::new(-4.0, 0.0), patrol_point: Vec2::new(4.0, 0.0) };
    let mut snake = Snake::new(SnakeConfig::default(), route)?;
    let mut snake_body = PlayBody::new(SNAKE_ID, ContactKind::Snake, 0.5, route.home, 1.0);

    let mut frog = Frog::new(FrogConfig::default())?;
    let mut frog_body =
        PlayBody::new(FROG_ID, ContactKind::Frog, 0.5, Vec2::new(8.0, -4.0), 1.0);

    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let mut flies: Vec<PlayBody> = scatter_flies(&mut rng, FLY_COUNT, POND_HALF_EXTENTS)
        .into_iter()
        .enumerate()
        .map(|(i, pos)| PlayBody::new(AgentId(10 + i as u32), ContactKind::Fly, 0.3, pos, 0.2))
        .collect();
    println!("  {} flies scattered over the pond", flies.len());

    let mut bubble: Option<(PlayBody, u32)> = None;
    let mut stats = EpisodeStats::default();
    let mut tick = 0u32;

    while tick < MAX_TICKS {
        let prev_state = snake.state();

        // retarget the hunt twice a second; flies drift while the frog hops
        if tick % 25 == 0 || !frog.has_move_target() {
            let frog_pos = frog_body.position;
            if let Some(nearest) = flies
                .iter()
                .min_by(|a, b| {
                    a.position.distance_to(frog_pos).total_cmp(&b.position.distance_to(frog_pos))
                })
            {
                frog.command_move_to(frog_pos, nearest.position);
            }
        }

        snake.tick(&mut snake_body, frog_body.position, &field);
        frog.tick(&mut frog_body);

        let positions: Vec<Vec2> = flies.iter().map(|f| f.position).collect();
        let velocities: Vec<Vec2> = flies.iter().map(|f| f.velocity).collect();
        for (i, fly) in flies.iter_mut().enumerate() {
            let others: Vec<Vec2> =
                positions.iter().enumerate().filter(|(j, _)| *j != i).map(|(_, p)| *p).collect();
            let other_vels: Vec<Vec2> =
                velocities.iter().enumerate().filter(|(j, _)| *j != i).map(|(_, v)| *v).collect();

            let mut desired = steering::separation(fly.position, &others, FLY_SPEED)
                + steering::cohesion(fly.position, &others, FLY_SPEED) * 0.4
                + steering::alignment(&other_vels, FLY_SPEED) * 0.4;
            desired = steering::anchor(desired, fly.position, POND_HALF_EXTENTS);

            let force = steering::desired_velocity_to_force(
                desired,
                fly.velocity,
                fly.mass,
                FLY_ACCEL_TIME,
                FLY_ACCEL,
            );
            fly.apply_force(force);
        }

        snake_body.step(TICK_DT);
        frog_body.step(TICK_DT);
        for fly in &mut flies {
            fly.step(TICK_DT);
        }
        if let Some((body, ttl)) = &mut bubble {
            body.step(TICK_DT);
            *ttl -= 1;
        }
        if matches!(bubble, Some((_, 0))) {
            bubble = None;
        }

        // contact routing, the same wiring a host engine would do
        let mut roster: Vec<PlayBody> = Vec::with_capacity(3 + flies.len());
        roster.push(snake_body.clone());
        roster.push(frog_body.clone());
        roster.extend(flies.iter().cloned());
        if let Some((body, _)) = &bubble {
            roster.push(body.clone());
        }
        for (receiver, event) in contact_events(&roster) {
            if receiver == SNAKE_ID {
                if snake.on_collision(event.kind) == BiteOutcome::BitFrog {
                    frog.take_hit();
                    stats.bites += 1;
                    println!(
                        "  🐍 t={:.1}s snake bit the frog ({} hp left)",
                        tick as f32 * TICK_DT,
                        frog.health()
                    );
                }
                if event.kind == ContactKind::Bubble {
                    bubble = None;
                    stats.bubbles_popped += 1;
                }
            } else if receiver == FROG_ID && frog.on_trigger(event.kind) {
                flies.retain(|f| f.id != event.other);
            }
        }

        // one defensive bubble at a time, fired straight at a closing snake
        if bubble.is_none()
            && snake.state() == SnakeState::Aggro
            && snake_body.position.distance_to(frog_body.position) < 3.0
        {
            let launch = frog.spawn_bubble(snake_body.position - frog_body.position);
            let mut body = PlayBody::new(
                BUBBLE_ID,
                ContactKind::Bubble,
                0.3,
                frog_body.position + launch.offset,
                0.1,
            );
            body.velocity = launch.velocity;
            bubble = Some((body, BUBBLE_LIFETIME_TICKS));
            stats.bubbles_fired += 1;
        }

        if snake.state() != prev_state {
            stats.state_changes += 1;
        }

        if tick % 1000 == 0 {
            let snap = TickSnapshot {
                tick,
                snake_state: snake.state().name(),
                snake_pos: snake_body.position,
                frog_pos: frog_body.position,
                frog_health: frog.health(),
                flies_eaten: frog.flies_eaten(),
                flies_left: flies.len(),
            };
            println!("  {}", serde_json::to_string(&snap)?);
        }

        tick += 1;
        if frog.verdict() != MatchVerdict::Ongoing {
            break;
        }
    }
    stats.ticks = tick;

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Episode summary");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  ticks:               {} ({:.1}s pond time)", stats.ticks, stats.ticks as f32 * TICK_DT);
    println!("  snake state changes: {}", stats.state_changes);
    println!("  bites:               {}", stats.bites);
    println!("  bubbles fired:       {} ({} popped on the snake)", stats.bubbles_fired, stats.bubbles_popped);
    println!("  flies eaten:         {}", frog.flies_eaten());
    println!("  frog health:         {}", frog.health());
    println!("  final verdict:       {}", frog.verdict().name());

    let patrol_ok = stats.state_changes >= 2;
    let hunt_ok = frog.flies_eaten() >= 1;
    let ended_ok = frog.verdict() != MatchVerdict::Ongoing;

    println!("\n📋 Checks:");
    println!("  Patrol cycling:  {}", if patrol_ok { "✅" } else { "⚠️" });
    println!("  Flies hunted:    {}", if hunt_ok { "✅" } else { "⚠️" });
    println!("  Episode decided: {}", if ended_ok { "✅" } else { "⚠️ (tick budget hit)" });

    if patrol_ok && hunt_ok && ended_ok {
        println!("\n  🎉 Full episode behaved!");
    }

    Ok(())
}
