//! Tests for pipeline graph behaviour.

use menagerie::*;

#[test]
fn pipeline_default_is_empty() {
    let p = Pipeline::default();
    assert_eq!(p.node_count(), 0);
}

#[test]
fn clones_share_one_graph() {
    let p1 = Pipeline::default();
    let p2 = p1.clone();
    let _data = from_vec(&p1, vec![1u32, 2, 3]);
    assert_eq!(p1.node_count(), 1);
    assert_eq!(p2.node_count(), 1);
}

#[test]
fn each_transform_adds_a_node() {
    let p = Pipeline::default();
    let _out = from_vec(&p, vec![1u32, 2, 3])
        .map(|x: &u32| x + 1)
        .filter(|x: &u32| *x > 2)
        .reversed();
    assert_eq!(p.node_count(), 4);
}

#[test]
fn branches_from_one_source_collect_independently() -> anyhow::Result<()> {
    let p = Pipeline::default();
    let src = from_vec(&p, vec![5u32, 1, 4]);
    let doubled = src.clone().map(|x: &u32| x * 2);
    let big = src.clone().filter(|x: &u32| *x > 3);

    assert_eq!(doubled.collect_seq()?, vec![10, 2, 8]);
    assert_eq!(big.collect_seq()?, vec![5, 4]);
    assert_eq!(src.collect_seq()?, vec![5, 1, 4]);
    Ok(())
}

#[test]
fn query_handles_extend_their_own_pipeline() -> anyhow::Result<()> {
    let q = AnimalQueries::sample(Runner::sequential());
    let before = q.pipeline().node_count();
    q.predators()?;
    assert!(q.pipeline().node_count() > before);
    Ok(())
}
