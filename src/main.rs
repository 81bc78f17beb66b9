use glam::Vec3;
use ik_walker::creature::{presets, Creature, TickInput};
use ik_walker::terrain::{ProceduralTerrain, TerrainKind};
use ik_walker::{Camera, CameraFollow, FollowMode, Ground, MovementIntent, Transform};

const DT: f32 = 1.0 / 60.0;
const TICKS: u32 = 600;
const SPEED: f32 = 1.5;
const BODY_HEIGHT: f32 = 1.4;

struct App {
    creature: Creature,
    ground: ProceduralTerrain,
    body: Transform,
    target: Vec3,
    camera: Camera,
    follow: CameraFollow,
    time: f32,
}

impl App {
    fn new() -> ik_walker::Result<Self> {
        let creature = presets::spider()?.face_aim(true).build()?;
        let ground = ProceduralTerrain::new(TerrainKind::Hills);
        let start = Vec3::new(0.0, ground.height_at(0.0, 0.0) + BODY_HEIGHT, 0.0);

        Ok(Self {
            creature,
            ground,
            body: Transform::from_position(start),
            target: Vec3::new(0.0, 0.0, 8.0),
            camera: Camera::default(),
            follow: CameraFollow::new(FollowMode::Locked),
            time: 0.0,
        })
    }

    fn update(&mut self) {
        self.time += DT;
        // Target circles slowly so the body has to turn.
        self.target = Vec3::new(8.0 * (self.time * 0.2).sin(), 0.0, 8.0 * (self.time * 0.2).cos());

        let to_target = (self.target - self.body.position) * Vec3::new(1.0, 0.0, 1.0);
        let intent = if to_target.length() > 0.5 {
            MovementIntent::moving(to_target.normalize() * SPEED)
        } else {
            MovementIntent::IDLE
        };

        let mut position = self.body.position + intent.velocity * DT;
        position.y = self.ground.height_at(position.x, position.z) + BODY_HEIGHT;
        self.body.position = position;

        let input = TickInput::new(self.body, intent, DT).with_aim(self.target);
        let report = self.creature.tick(&input, &self.ground);
        if !report.skipped.is_empty() {
            log::warn!("{} limbs skipped this tick", report.skipped.len());
        }
        if let Some(body) = self.creature.body() {
            self.body = *body;
        }

        self.follow.update(&mut self.camera, self.body.position, DT);
    }

    fn summary(&self) {
        let grounded = self
            .creature
            .gait()
            .map(|g| g.states().iter().filter(|s| s.is_grounded()).count())
            .unwrap_or(0);
        let (_, normal) = self.ground.project(self.body.position);
        log::info!(
            "t={:.1}s body=({:.2}, {:.2}, {:.2}) yaw={:.2} grounded={} slope={:.2} camera=({:.1}, {:.1}, {:.1})",
            self.time,
            self.body.position.x,
            self.body.position.y,
            self.body.position.z,
            self.body.yaw(),
            grounded,
            normal.y,
            self.camera.position.x,
            self.camera.position.y,
            self.camera.position.z,
        );
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut app = match App::new() {
        Ok(app) => app,
        Err(e) => {
            log::error!("Failed to assemble creature: {}", e);
            std::process::exit(1);
        }
    };

    for tick in 0..TICKS {
        app.update();
        if tick % 60 == 0 {
            app.summary();
        }
    }
    app.summary();
}
