use grid_astar::behavior::{leaf, BehaviorNode, BehaviorStatus, BoxedNode, Selector, Sequence};
use grid_astar::enemy::{Enemy, EnemyConfig, EnemyState, Position};
use grid_astar::{find_path, PathingGrid};
use grid_util::point::Point;

// A player walks along an A* path across an open room while an enemy driven by the state
// machine reacts to the distance. A behavior tree decides what the player announces each tick.
const MAP: &str = "
............
....##......
....##......
............
";

struct Tick {
    enemy_state: EnemyState,
    message: &'static str,
}

fn player_tree() -> Selector<Tick> {
    Selector::new(vec![
        Box::new(Sequence::new(vec![
            leaf(|t: &mut Tick| {
                if t.enemy_state == EnemyState::Attack {
                    BehaviorStatus::Success
                } else {
                    BehaviorStatus::Failure
                }
            }),
            leaf(|t: &mut Tick| {
                t.message = "under attack!";
                BehaviorStatus::Success
            }),
        ])) as BoxedNode<Tick>,
        leaf(|t: &mut Tick| {
            t.message = if t.enemy_state == EnemyState::Chase {
                "being chased"
            } else {
                "walking"
            };
            BehaviorStatus::Running
        }),
    ])
}

fn main() {
    let pathing_grid: PathingGrid = MAP.parse().expect("demo map is valid");
    let path = match find_path(&pathing_grid, Point::new(0, 0), Point::new(11, 3)) {
        Ok(Some(path)) => path,
        _ => {
            println!("Player has nowhere to go");
            return;
        }
    };
    let mut enemy = Enemy::new(Position::new(11.0, 0.0), EnemyConfig::default());
    let mut tree = player_tree();
    for cell in path {
        let player = Position::new(cell.x as f32, cell.y as f32);
        let enemy_state = enemy.update(&player, 0.5);
        let mut tick = Tick {
            enemy_state,
            message: "",
        };
        tree.evaluate(&mut tick);
        println!(
            "player {:?}, enemy ({:.1}, {:.1}) {:?}: {}",
            cell, enemy.position.x, enemy.position.y, enemy_state, tick.message
        );
    }
}
