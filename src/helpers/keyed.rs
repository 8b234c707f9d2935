use crate::{ElemBound, PCollection};
use std::collections::HashMap;
use std::hash::Hash;

impl<T: ElemBound> PCollection<T> {
    /// Derive a key and produce (K, T)
    pub fn key_by<K, F>(self, key_fn: F) -> PCollection<(K, T)>
    where
        K: ElemBound + Eq + Hash,
        F: 'static + Send + Sync + Fn(&T) -> K,
    {
        self.map(move |t: &T| (key_fn(t), t.clone()))
    }
}

impl<K: ElemBound + Eq + Hash, V: ElemBound> PCollection<(K, V)> {
    /// Group values by key: (K, V) -> (K, Vec<V>)
    ///
    /// Values keep their source order within a group. Groups are emitted in
    /// order of each key's first appearance.
    pub fn group_by_key(self) -> PCollection<(K, Vec<V>)> {
        self.barrier(
            |chunk: Vec<(K, V)>| group_in_order(chunk.into_iter().map(|(k, v)| (k, vec![v]))),
            |parts: Vec<Vec<(K, Vec<V>)>>| group_in_order(parts.into_iter().flatten()),
        )
    }
}

fn group_in_order<K, V, I>(pairs: I) -> Vec<(K, Vec<V>)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = (K, Vec<V>)>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut out: Vec<(K, Vec<V>)> = Vec::new();
    for (k, vs) in pairs {
        match index.get(&k) {
            Some(&i) => out[i].1.extend(vs),
            None => {
                index.insert(k.clone(), out.len());
                out.push((k, vs));
            }
        }
    }
    out
}
