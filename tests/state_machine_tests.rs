use dsssp::algorithm::Distance;
use dsssp::protocol::{FloodKind, Message, Phase, RecordingOutbox, VertexProcess};
use dsssp::Error;

fn length(weight: i64, source: usize) -> Message<i64> {
    Message::Length { weight, source }
}

fn ack(from: usize) -> Message<i64> {
    Message::Ack { from }
}

fn flood(kind: FloodKind, origin: usize) -> Message<i64> {
    Message::Broadcast { kind, origin }
}

#[test]
fn test_leaf_returns_credit_immediately() {
    let mut out = RecordingOutbox::new();
    let mut leaf = VertexProcess::<i64>::member(1, vec![], 0, 0);
    assert_eq!(leaf.phase(), Phase::Idle);

    leaf.handle(length(5, 0), &mut out).unwrap();

    assert_eq!(out.take(), vec![(0, ack(1))]);
    assert_eq!(leaf.length(), Distance::Finite(5));
    assert_eq!(leaf.predecessor(), Some(0));
    assert_eq!(leaf.pending_acks(), 0);
    assert_eq!(leaf.phase(), Phase::Active);
}

#[test]
fn test_improvement_relaxes_row_and_swaps_parent() {
    let mut out = RecordingOutbox::new();
    let mut vertex = VertexProcess::<i64>::member(1, vec![(2, 2), (3, 4)], 0, 0);

    vertex.handle(length(5, 0), &mut out).unwrap();
    assert_eq!(out.take(), vec![(2, length(7, 1)), (3, length(9, 1))]);
    assert_eq!(vertex.pending_acks(), 2);

    // A shorter path via 4 arrives while the first wave is still out
    vertex.handle(length(3, 4), &mut out).unwrap();
    assert_eq!(out.take(), vec![(0, ack(1)), (2, length(5, 1)), (3, length(7, 1))]);
    assert_eq!(vertex.pending_acks(), 4);
    assert_eq!(vertex.predecessor(), Some(4));
    assert_eq!(vertex.length(), Distance::Finite(3));

    for from in [2, 3, 2] {
        vertex.handle(ack(from), &mut out).unwrap();
        assert!(out.take().is_empty());
    }
    vertex.handle(ack(3), &mut out).unwrap();

    // Quiesced: the current parent gets its credit back, nobody else
    assert_eq!(out.take(), vec![(4, ack(1))]);
    assert_eq!(vertex.pending_acks(), 0);
    assert_eq!(vertex.stats().lengths_sent, 4);
    assert_eq!(vertex.stats().acks_received, 4);
    assert_eq!(vertex.stats().acks_sent, 2);
}

#[test]
fn test_non_improving_length_is_rejected() {
    let mut out = RecordingOutbox::new();
    let mut vertex = VertexProcess::<i64>::member(1, vec![], 0, 0);
    vertex.handle(length(5, 0), &mut out).unwrap();
    out.take();

    vertex.handle(length(5, 7), &mut out).unwrap();
    vertex.handle(length(6, 8), &mut out).unwrap();

    assert_eq!(out.take(), vec![(7, ack(1)), (8, ack(1))]);
    assert_eq!(vertex.length(), Distance::Finite(5));
    assert_eq!(vertex.predecessor(), Some(0));
    assert_eq!(vertex.stats().rejected, 2);
}

#[test]
fn test_ack_without_credit_is_a_protocol_violation() {
    let mut out = RecordingOutbox::new();
    let mut vertex = VertexProcess::<i64>::member(1, vec![(2, 1)], 0, 0);

    let err = vertex.handle(ack(2), &mut out).unwrap_err();
    assert!(matches!(err, Error::ProtocolViolation { vertex: 1, .. }));
    assert_eq!(vertex.pending_acks(), 0);
}

#[test]
fn test_quiescent_vertex_forwards_flood_once() {
    let mut out = RecordingOutbox::new();
    let mut vertex = VertexProcess::<i64>::member(1, vec![(2, 1)], 0, 0);
    vertex.handle(length(5, 0), &mut out).unwrap();
    vertex.handle(ack(2), &mut out).unwrap();
    assert_eq!(out.take(), vec![(2, length(6, 1)), (0, ack(1))]);

    vertex.handle(flood(FloodKind::Completed, 0), &mut out).unwrap();
    assert_eq!(out.take(), vec![(2, flood(FloodKind::Completed, 1))]);
    assert!(vertex.is_done());
    assert_eq!(vertex.verdict(), Some(FloodKind::Completed));
    assert_eq!(vertex.length(), Distance::Finite(5));

    // Later floods and stray messages change nothing
    vertex.handle(flood(FloodKind::NegativeCycle, 3), &mut out).unwrap();
    vertex.handle(length(1, 3), &mut out).unwrap();
    assert!(out.take().is_empty());
    assert_eq!(vertex.verdict(), Some(FloodKind::Completed));
    assert_eq!(vertex.stats().floods_forwarded, 1);
}

#[test]
fn test_quiescent_vertex_keeps_negative_cycle_kind() {
    let mut out = RecordingOutbox::new();
    let mut vertex = VertexProcess::<i64>::member(1, vec![(2, 1), (3, 1)], 0, 0);

    vertex.handle(flood(FloodKind::NegativeCycle, 0), &mut out).unwrap();

    assert_eq!(
        out.take(),
        vec![(2, flood(FloodKind::NegativeCycle, 1)), (3, flood(FloodKind::NegativeCycle, 1))]
    );
    assert_eq!(vertex.verdict(), Some(FloodKind::NegativeCycle));
    assert_eq!(vertex.length(), Distance::Unreachable);
}

#[test]
fn test_busy_vertex_treats_completion_as_negative_cycle() {
    let mut out = RecordingOutbox::new();
    let mut vertex = VertexProcess::<i64>::member(1, vec![(2, 1)], 0, 0);
    vertex.handle(length(5, 0), &mut out).unwrap();
    out.take();
    assert_eq!(vertex.pending_acks(), 1);

    vertex.handle(flood(FloodKind::Completed, 0), &mut out).unwrap();

    assert_eq!(out.take(), vec![(2, flood(FloodKind::NegativeCycle, 1))]);
    assert_eq!(vertex.length(), Distance::NegativeInfinity);
    assert_eq!(vertex.verdict(), Some(FloodKind::NegativeCycle));
    assert_eq!(vertex.phase(), Phase::Terminated);
}

#[test]
fn test_length_below_floor_declares_negative_cycle() {
    let mut out = RecordingOutbox::new();
    let mut vertex = VertexProcess::<i64>::member(1, vec![(2, 1)], 0, -3);

    vertex.handle(length(-3, 2), &mut out).unwrap();
    assert_eq!(vertex.length(), Distance::Finite(-3));
    out.take();

    vertex.handle(length(-4, 2), &mut out).unwrap();
    assert_eq!(
        out.take(),
        vec![(2, flood(FloodKind::NegativeCycle, 1)), (0, flood(FloodKind::NegativeCycle, 1))]
    );
    assert_eq!(vertex.length(), Distance::NegativeInfinity);
    assert!(vertex.is_done());
}

#[test]
fn test_relaxation_below_weight_range_declares_negative_cycle() {
    let mut out = RecordingOutbox::new();
    let mut vertex = VertexProcess::<i8>::member(2, vec![(1, -100)], 0, i8::MIN);

    vertex
        .handle(Message::Length { weight: -99, source: 1 }, &mut out)
        .unwrap();

    assert_eq!(
        out.take(),
        vec![
            (1, Message::Broadcast { kind: FloodKind::NegativeCycle, origin: 2 }),
            (0, Message::Broadcast { kind: FloodKind::NegativeCycle, origin: 2 }),
        ]
    );
    assert_eq!(vertex.length(), Distance::NegativeInfinity);
    assert!(vertex.is_done());
}

#[test]
fn test_detector_downstream_of_root_reports_once() {
    let mut out = RecordingOutbox::new();
    let mut vertex = VertexProcess::<i64>::member(1, vec![(0, 1)], 0, -2);

    vertex.handle(length(-5, 0), &mut out).unwrap();

    assert_eq!(out.take(), vec![(0, flood(FloodKind::NegativeCycle, 1))]);
}

#[test]
fn test_root_completes_when_credit_returns() {
    let mut out = RecordingOutbox::new();
    let mut root = VertexProcess::<i64>::root(0, vec![(1, 5), (2, 3)]);

    root.start(&mut out);
    assert_eq!(out.take(), vec![(1, length(5, 0)), (2, length(3, 0))]);
    assert_eq!(root.pending_acks(), 2);

    // Paths back into the root never improve it
    root.handle(length(4, 2), &mut out).unwrap();
    assert_eq!(out.take(), vec![(2, ack(0))]);

    root.handle(ack(1), &mut out).unwrap();
    assert!(!root.is_done());
    root.handle(ack(2), &mut out).unwrap();

    assert!(root.is_done());
    assert_eq!(root.verdict(), Some(FloodKind::Completed));
    assert_eq!(root.length(), Distance::Finite(0));
    assert_eq!(root.predecessor(), None);
    assert_eq!(
        out.take(),
        vec![(1, flood(FloodKind::Completed, 0)), (2, flood(FloodKind::Completed, 0))]
    );
}

#[test]
fn test_root_detects_negative_return() {
    let mut out = RecordingOutbox::new();
    let mut root = VertexProcess::<i64>::root(0, vec![(1, 1)]);
    root.start(&mut out);
    out.take();

    root.handle(length(-4, 1), &mut out).unwrap();

    assert!(root.is_done());
    assert_eq!(root.verdict(), Some(FloodKind::NegativeCycle));
    assert_eq!(root.length(), Distance::Finite(0));
    assert_eq!(out.take(), vec![(1, flood(FloodKind::NegativeCycle, 0))]);
}

#[test]
fn test_root_without_out_edges_completes_at_start() {
    let mut out = RecordingOutbox::new();
    let mut root = VertexProcess::<i64>::root(0, vec![]);

    root.start(&mut out);

    assert!(root.is_done());
    assert_eq!(root.verdict(), Some(FloodKind::Completed));
    assert!(out.take().is_empty());
}

#[test]
fn test_root_acts_on_negative_cycle_report() {
    let mut out = RecordingOutbox::new();
    let mut root = VertexProcess::<i64>::root(0, vec![(1, 1)]);
    root.start(&mut out);
    out.take();

    root.handle(flood(FloodKind::Completed, 3), &mut out).unwrap();
    assert!(!root.is_done());

    root.handle(flood(FloodKind::NegativeCycle, 3), &mut out).unwrap();
    assert!(root.is_done());
    assert_eq!(root.verdict(), Some(FloodKind::NegativeCycle));
    assert_eq!(out.take(), vec![(1, flood(FloodKind::NegativeCycle, 0))]);
}

#[test]
fn test_member_start_is_a_no_op() {
    let mut out = RecordingOutbox::new();
    let mut vertex = VertexProcess::<i64>::member(3, vec![(1, 1)], 0, 0);

    vertex.start(&mut out);

    assert!(out.take().is_empty());
    assert_eq!(vertex.phase(), Phase::Idle);
}
