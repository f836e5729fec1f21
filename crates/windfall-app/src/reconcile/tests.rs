//! Reconciliation against an in-memory window manager.

use super::*;
use windfall_common::{Pid, Rect, WindowId};
use windfall_physics::SimulationSettings;
use windfall_sway::{InMemoryWindowManager, Node, NodeType, Workspace};

const TICK: f32 = 1.0 / 30.0;

fn workspace(focused: bool) -> Workspace {
    Workspace {
        id: WindowId(9),
        name: "9".into(),
        output: "eDP-1".into(),
        visible: true,
        focused,
        rect: Rect::new(0, 0, 1280, 800),
    }
}

fn window(id: i64, x: i32, y: i32) -> Node {
    Node {
        id: WindowId(id),
        node_type: NodeType::FloatingCon,
        rect: Rect::new(x, y, 200, 100),
        pid: Some(Pid(500 + id as u32)),
        ..Node::default()
    }
}

fn tree(floating: Vec<Node>) -> Node {
    let ws = Node {
        id: WindowId(9),
        node_type: NodeType::Workspace,
        name: Some("9".into()),
        rect: Rect::new(0, 0, 1280, 800),
        floating_nodes: floating,
        ..Node::default()
    };
    Node {
        id: WindowId(1),
        node_type: NodeType::Root,
        nodes: vec![ws],
        ..Node::default()
    }
}

fn selector() -> WorkspaceSelector {
    WorkspaceSelector {
        output: "eDP-1".into(),
        name: Some("9".into()),
        only_when_focused: true,
    }
}

fn reconciler(
    floating: Vec<Node>,
    settings: SimulationSettings,
) -> Reconciler<InMemoryWindowManager> {
    let wm = InMemoryWindowManager::new(vec![workspace(true)], tree(floating));
    Reconciler::new(wm, Simulation::seeded(settings, 11), selector(), None)
}

fn tracked(reconciler: &Reconciler<InMemoryWindowManager>) -> Vec<WindowId> {
    reconciler.simulation().tracked_ids().collect()
}

#[tokio::test]
async fn tracks_exactly_the_floating_windows() {
    let mut r = reconciler(
        vec![window(20, 100, 300), window(21, 600, 300)],
        SimulationSettings::default(),
    );
    let outcome = r.tick(TICK).await.unwrap();
    assert_eq!(
        outcome,
        TickOutcome::Simulated {
            windows: 2,
            commands: 4
        }
    );
    assert_eq!(tracked(&r), vec![WindowId(20), WindowId(21)]);

    r.window_manager().tree.remove_descendant(WindowId(20));
    r.tick(TICK).await.unwrap();
    assert_eq!(tracked(&r), vec![WindowId(21)]);
}

#[tokio::test]
async fn sends_move_and_workspace_commands_per_window() {
    let mut r = reconciler(vec![window(20, 100, 300)], SimulationSettings::default());
    r.tick(TICK).await.unwrap();

    let sent = r.window_manager().take_sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(
        sent[0],
        WmCommand::MoveAbsolute {
            id: WindowId(20),
            x: 100,
            y: 300
        }
    );
    assert_eq!(
        sent[1],
        WmCommand::MoveToWorkspace {
            id: WindowId(20),
            workspace: "9".into()
        }
    );
}

#[tokio::test]
async fn static_windows_are_never_moved() {
    let mut sticky = window(20, 100, 300);
    sticky.sticky = true;
    let mut r = reconciler(vec![sticky], SimulationSettings::default());
    r.tick(TICK).await.unwrap();
    assert!(r.window_manager().take_sent().is_empty());
    assert_eq!(tracked(&r), vec![WindowId(20)]);
}

#[tokio::test]
async fn unfocused_workspace_is_left_alone() {
    let wm = InMemoryWindowManager::new(vec![workspace(false)], tree(vec![window(20, 100, 300)]));
    let mut r = Reconciler::new(
        wm,
        Simulation::seeded(SimulationSettings::default(), 1),
        selector(),
        None,
    );
    assert_eq!(r.tick(TICK).await.unwrap(), TickOutcome::Idle(Idle::Unfocused));
    assert!(tracked(&r).is_empty());
    assert!(r.window_manager().sent.is_empty());
}

#[tokio::test]
async fn focused_descendant_counts_as_focus() {
    let mut focused = window(20, 100, 300);
    focused.focused = true;
    let wm = InMemoryWindowManager::new(vec![workspace(false)], tree(vec![focused]));
    let mut r = Reconciler::new(
        wm,
        Simulation::seeded(SimulationSettings::default(), 1),
        selector(),
        None,
    );
    assert!(matches!(
        r.tick(TICK).await.unwrap(),
        TickOutcome::Simulated { .. }
    ));
}

#[tokio::test]
async fn fullscreen_freezes_the_workspace() {
    let mut full = window(21, 0, 0);
    full.fullscreen_mode = 1;
    let mut r = reconciler(
        vec![window(20, 100, 300), full],
        SimulationSettings::default(),
    );
    assert_eq!(r.tick(TICK).await.unwrap(), TickOutcome::Idle(Idle::Fullscreen));
    assert!(tracked(&r).is_empty());
}

#[tokio::test]
async fn arena_follows_workspaces_up_to_the_selected_one() {
    let other = Workspace {
        id: WindowId(5),
        name: "5".into(),
        output: "HDMI-A-1".into(),
        visible: true,
        focused: false,
        rect: Rect::new(1280, 0, 1920, 1080),
    };
    let wm = InMemoryWindowManager::new(vec![other, workspace(true)], tree(vec![]));
    let mut r = Reconciler::new(
        wm,
        Simulation::seeded(SimulationSettings::default(), 1),
        selector(),
        None,
    );
    r.tick(TICK).await.unwrap();
    assert_eq!(
        r.simulation().frame().map(|f| f.rect),
        Some(Rect::new(0, 0, 1280, 800))
    );

    r.window_manager().workspaces[1].visible = false;
    assert_eq!(r.tick(TICK).await.unwrap(), TickOutcome::Idle(Idle::NoWorkspace));
    assert_eq!(
        r.simulation().frame().map(|f| f.rect),
        Some(Rect::new(0, 0, 1280, 800)),
        "the last workspace visited sizes the arena"
    );
}

#[tokio::test]
async fn window_above_discard_height_is_killed() {
    let mut r = reconciler(vec![window(20, 300, -2500)], SimulationSettings::default());
    r.tick(TICK).await.unwrap();

    let sent = r.window_manager().take_sent();
    assert!(sent.contains(&WmCommand::Kill { id: WindowId(20) }));
    assert!(r.window_manager().tree.find_by_id(WindowId(20)).is_none());

    r.tick(TICK).await.unwrap();
    assert!(tracked(&r).is_empty());
}

#[tokio::test]
async fn audio_receives_snapshots_and_removals() {
    let (snap_tx, snap_rx) = watch::channel(AudioSnapshot::default());
    let (removal_tx, mut removal_rx) = mpsc::unbounded_channel();
    let wm = InMemoryWindowManager::new(vec![workspace(true)], tree(vec![window(20, 100, 300)]));
    let mut r = Reconciler::new(
        wm,
        Simulation::seeded(SimulationSettings::default(), 1),
        selector(),
        Some(AudioLink {
            snapshots: snap_tx,
            removals: removal_tx,
        }),
    );

    r.tick(TICK).await.unwrap();
    {
        let snapshot = snap_rx.borrow();
        assert_eq!(snapshot.sources.len(), 1);
        assert_eq!(snapshot.sources[0].pid, Some(Pid(520)));
        assert_eq!(snapshot.width, 10.0);
    }

    r.window_manager().tree.remove_descendant(WindowId(20));
    r.tick(TICK).await.unwrap();
    let removed = removal_rx.try_recv().unwrap();
    assert_eq!(removed.id, WindowId(20));
    assert_eq!(removed.pid, Some(Pid(520)));
    assert!(snap_rx.borrow().sources.is_empty());
}

#[tokio::test]
async fn ticks_survive_a_stopped_audio_pipeline() {
    let (snap_tx, snap_rx) = watch::channel(AudioSnapshot::default());
    let (removal_tx, removal_rx) = mpsc::unbounded_channel();
    drop(removal_rx);
    let wm = InMemoryWindowManager::new(vec![workspace(true)], tree(vec![window(20, 100, 300)]));
    let mut r = Reconciler::new(
        wm,
        Simulation::seeded(SimulationSettings::default(), 1),
        selector(),
        Some(AudioLink {
            snapshots: snap_tx,
            removals: removal_tx,
        }),
    );
    r.tick(TICK).await.unwrap();

    r.window_manager().tree.remove_descendant(WindowId(20));
    assert!(matches!(
        r.tick(TICK).await.unwrap(),
        TickOutcome::Simulated { windows: 0, .. }
    ));
    assert!(tracked(&r).is_empty());
    assert!(snap_rx.borrow().sources.is_empty());
}

#[tokio::test]
async fn spawned_window_falls_to_the_floor() {
    let settings = SimulationSettings {
        restitution: 0.0,
        ..SimulationSettings::default()
    };
    let mut r = reconciler(vec![window(20, 200, -1500)], settings);
    for _ in 0..900 {
        r.tick(TICK).await.unwrap();
        let kills = r
            .window_manager()
            .take_sent()
            .into_iter()
            .filter(|c| matches!(c, WmCommand::Kill { .. }))
            .count();
        assert_eq!(kills, 0);
    }

    let rect = r
        .window_manager()
        .tree
        .find_by_id(WindowId(20))
        .map(|n| n.rect)
        .unwrap();
    assert!((rect.y - 700).abs() <= 2, "resting y = {}", rect.y);
    assert!((0..=1080).contains(&rect.x), "resting x = {}", rect.x);

    let record = r.simulation().window(WindowId(20)).unwrap();
    assert_eq!((record.x, record.y), (rect.x, rect.y));
}

#[tokio::test]
async fn run_returns_on_shutdown() {
    let r = reconciler(vec![], SimulationSettings::default());
    let (tx, rx) = watch::channel(false);
    let task = tokio::spawn(r.run(30, rx));
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    tx.send(true).unwrap();
    task.await.unwrap().unwrap();
}
