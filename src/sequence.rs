//! Defines the `Sequence` trait - a recorded sequence of places visited by a robot, queried for
//! room and category statistics.
//!
//! Dataset formats differ in what they record. Some name every room, so rooms and the doors
//! between them can be counted; others only label the category of each frame. Counting queries
//! therefore return `None` when a dataset cannot answer them.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;


/// An ordered pair of names. ```(a, b)``` and ```(b, a)``` are different keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderedPair {
    pub first: String,
    pub second: String
}

impl OrderedPair {

    pub fn new(first: &str, second: &str) -> Self {
        OrderedPair { first: String::from(first), second: String::from(second) }
    }

    pub fn reversed(&self) -> Self {
        OrderedPair { first: self.second.clone(), second: self.first.clone() }
    }

}

/// A transition between two categories
pub type CategoryPair = OrderedPair;

/// A transition between two rooms
pub type RoomPair = OrderedPair;


/// All data associated with a given time of a sequence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    /// The room the sample was taken in, if the dataset identifies rooms
    pub room: Option<String>,

    pub category: String
}

impl Sample {

    pub fn new(room: &str, category: &str) -> Self {
        Sample { room: Some(String::from(room)), category: String::from(category) }
    }

    pub fn unnamed(category: &str) -> Self {
        Sample { room: None, category: String::from(category) }
    }

}


pub trait Sequence {

    /// The samples in time order
    fn samples(&self) -> &[Sample];

    /// The categories seen in the sequence, in order of first appearance
    fn categories(&self) -> Vec<&str>;

    /// The category transitions seen in the sequence
    fn category_pairs(&self) -> Vec<&CategoryPair>;

    /// The number of distinct rooms of a category, or `None` if rooms are not identified
    fn rooms_in_category(&self, category: &str) -> Option<usize>;

    /// The number of room transitions from a room of ```pair.first``` to a room of
    /// ```pair.second```, or `None` if rooms are not identified.
    fn edges_between_categories(&self, pair: &CategoryPair) -> Option<usize>;

}


/// Index of a sequence whose samples name their room.
///
/// A room transition is recorded whenever two consecutive samples are in different rooms, in
/// both directions, so the category statistics are symmetric.
#[derive(Clone, Debug, Default)]
pub struct RoomIndex {
    samples: Vec<Sample>,

    /// Room -> positions of its samples
    room_samples: IndexMap<String, Vec<usize>>,

    room_edges: IndexSet<RoomPair>,

    /// Category -> rooms
    category: IndexMap<String, IndexSet<String>>,

    /// Category transition -> room transitions
    category_edge: IndexMap<CategoryPair, IndexSet<RoomPair>>
}


impl RoomIndex {

    /// Index the samples of a time sequence. Samples without a room are kept but not indexed.
    pub fn from_samples<I: IntoIterator<Item = Sample>>(samples: I) -> Self {
        let mut index = RoomIndex::default();

        let mut prev: Option<String> = None;
        for sample in samples {
            let pos = index.samples.len();
            if let Some(ref room) = sample.room {
                index.room_samples.entry(room.clone()).or_insert_with(Vec::new).push(pos);

                if let Some(ref p) = prev {
                    if p != room {
                        let edge = RoomPair::new(p, room);
                        index.room_edges.insert(edge.reversed());
                        index.room_edges.insert(edge);
                    }
                }
                prev = Some(room.clone());
            }
            index.samples.push(sample);
        }

        index.build_categories();
        debug!("indexed {} samples in {} rooms", index.samples.len(), index.room_samples.len());
        index
    }

    fn build_categories(&mut self) {
        let rooms: Vec<(String, String)> = self.room_samples.keys().filter_map(|room| {
            self.room_category(room).map(|cat| (String::from(cat), room.clone()))
        }).collect();

        for (cat, room) in rooms {
            self.category.entry(cat).or_insert_with(IndexSet::new).insert(room);
        }

        let edges: Vec<(CategoryPair, RoomPair)> = self.room_edges.iter().filter_map(|edge| {
            match (self.room_category(&edge.first), self.room_category(&edge.second)) {
                (Some(c1), Some(c2)) => Some((CategoryPair::new(c1, c2), edge.clone())),
                _ => None
            }
        }).collect();

        for (pair, edge) in edges {
            self.category_edge.entry(pair).or_insert_with(IndexSet::new).insert(edge);
        }
    }

    /// The category of a room. All samples of a room are assumed to share a category, so this
    /// is the category of its first sample.
    pub fn room_category(&self, room: &str) -> Option<&str> {
        self.room_samples.get(room)
            .and_then(|s| s.first())
            .map(|&pos| self.samples[pos].category.as_str())
    }

    /// The rooms in order of first appearance
    pub fn rooms(&self) -> Vec<&str> {
        self.room_samples.keys().map(|r| r.as_str()).collect()
    }

    /// The samples taken in a room
    pub fn room_samples<'a>(&'a self, room: &str) -> Vec<&'a Sample> {
        match self.room_samples.get(room) {
            Some(s) => s.iter().map(|&pos| &self.samples[pos]).collect(),
            None => vec![]
        }
    }

    pub fn room_edges(&self) -> &IndexSet<RoomPair> {
        &self.room_edges
    }

}


impl Sequence for RoomIndex {

    fn samples(&self) -> &[Sample] {
        &self.samples
    }

    fn categories(&self) -> Vec<&str> {
        self.category.keys().map(|c| c.as_str()).collect()
    }

    fn category_pairs(&self) -> Vec<&CategoryPair> {
        self.category_edge.keys().collect()
    }

    fn rooms_in_category(&self, category: &str) -> Option<usize> {
        Some(self.category.get(category).map_or(0, |r| r.len()))
    }

    fn edges_between_categories(&self, pair: &CategoryPair) -> Option<usize> {
        Some(self.category_edge.get(pair).map_or(0, |e| e.len()))
    }

}


/// Index of a sequence that only labels the category of each sample.
///
/// A transition is recorded, in one direction, whenever two consecutive samples differ in
/// category. A `None` in the input marks a break in the recording: no transition spans it.
#[derive(Clone, Debug, Default)]
pub struct CategoryIndex {
    samples: Vec<Sample>,
    category: IndexSet<String>,
    category_edge: IndexSet<CategoryPair>
}


impl CategoryIndex {

    pub fn from_categories<'a, I: IntoIterator<Item = Option<&'a str>>>(categories: I) -> Self {
        let mut index = CategoryIndex::default();

        let mut last: Option<&str> = None;
        for cat in categories {
            match cat {
                Some(c) => {
                    index.category.insert(String::from(c));
                    if let Some(l) = last {
                        if l != c {
                            index.category_edge.insert(CategoryPair::new(l, c));
                        }
                    }
                    index.samples.push(Sample::unnamed(c));
                    last = Some(c);
                },
                None => last = None
            }
        }

        debug!("indexed {} samples in {} categories", index.samples.len(), index.category.len());
        index
    }

}


impl Sequence for CategoryIndex {

    fn samples(&self) -> &[Sample] {
        &self.samples
    }

    fn categories(&self) -> Vec<&str> {
        self.category.iter().map(|c| c.as_str()).collect()
    }

    fn category_pairs(&self) -> Vec<&CategoryPair> {
        self.category_edge.iter().collect()
    }

    fn rooms_in_category(&self, _category: &str) -> Option<usize> {
        None
    }

    fn edges_between_categories(&self, _pair: &CategoryPair) -> Option<usize> {
        None
    }

}


#[cfg(test)]
mod tests {

    use super::*;

    fn tour() -> RoomIndex {
        RoomIndex::from_samples(vec![
            Sample::new("CR-A", "Corridor"),
            Sample::new("CR-A", "Corridor"),
            Sample::new("KT1", "Kitchen"),
            Sample::new("CR-A", "Corridor"),
            Sample::new("1PO1", "Office"),
            Sample::new("1PO2", "Office"),
            Sample::new("CR-A", "Corridor"),
        ])
    }

    #[test]
    fn rooms() {
        let seq = tour();
        assert_eq!(7, seq.samples().len());
        assert_eq!(vec!["CR-A", "KT1", "1PO1", "1PO2"], seq.rooms());
        assert_eq!(Some("Office"), seq.room_category("1PO2"));
        assert_eq!(None, seq.room_category("LAB"));
        assert_eq!(4, seq.room_samples("CR-A").len());
        assert!(seq.room_samples("LAB").is_empty());
    }

    #[test]
    fn room_edges_symmetric() {
        let seq = tour();
        // CR-A <-> KT1, CR-A <-> 1PO1, 1PO1 <-> 1PO2, 1PO2 <-> CR-A
        assert_eq!(8, seq.room_edges().len());
        for e in seq.room_edges() {
            assert!(seq.room_edges().contains(&e.reversed()));
        }
    }

    #[test]
    fn category_statistics() {
        let seq = tour();
        assert_eq!(vec!["Corridor", "Kitchen", "Office"], seq.categories());

        assert_eq!(Some(1), seq.rooms_in_category("Corridor"));
        assert_eq!(Some(2), seq.rooms_in_category("Office"));
        assert_eq!(Some(0), seq.rooms_in_category("Lab"));

        assert_eq!(Some(1), seq.edges_between_categories(&CategoryPair::new("Corridor", "Kitchen")));
        assert_eq!(Some(1), seq.edges_between_categories(&CategoryPair::new("Kitchen", "Corridor")));
        assert_eq!(Some(2), seq.edges_between_categories(&CategoryPair::new("Corridor", "Office")));
        assert_eq!(Some(2), seq.edges_between_categories(&CategoryPair::new("Office", "Office")));
        assert_eq!(Some(0), seq.edges_between_categories(&CategoryPair::new("Kitchen", "Office")));
    }

    #[test]
    fn unnamed_samples_are_skipped() {
        let seq = RoomIndex::from_samples(vec![
            Sample::new("A", "Corridor"),
            Sample::unnamed("Corridor"),
            Sample::new("B", "Kitchen"),
        ]);
        assert_eq!(3, seq.samples().len());
        assert_eq!(2, seq.room_edges().len());
    }

    #[test]
    fn categories_only() {
        let labels = vec![
            Some("Corridor"), Some("Corridor"), Some("Kitchen"), None, Some("Office"), Some("Kitchen")
        ];
        let seq = CategoryIndex::from_categories(labels);

        assert_eq!(5, seq.samples().len());
        assert_eq!(vec!["Corridor", "Kitchen", "Office"], seq.categories());
        assert_eq!(
            vec![&CategoryPair::new("Corridor", "Kitchen"), &CategoryPair::new("Office", "Kitchen")],
            seq.category_pairs()
        );
        assert_eq!(None, seq.rooms_in_category("Kitchen"));
        assert_eq!(None, seq.edges_between_categories(&CategoryPair::new("Corridor", "Kitchen")));
    }

    #[test]
    fn generic_over_sequences() {
        fn num_categories<S: Sequence>(s: &S) -> usize {
            s.categories().len()
        }

        assert_eq!(3, num_categories(&tour()));
        assert_eq!(1, num_categories(&CategoryIndex::from_categories(vec![Some("Lab")])));
    }

}
