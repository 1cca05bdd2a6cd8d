//! Plain-text rendering of grown trees.
use super::gain::feature_gains;
use super::node::NodeRecord;
use super::params::TreeParams;
use crate::data::dataset::{Dataset, WholeNumber};
use crate::error::Result;
use nalgebra::DVector;

/// Consumer of node records, fed in the order the builder visited the nodes.
pub trait TreeRecorder {
    fn record(&mut self, record: &NodeRecord);
}

impl TreeRecorder for Vec<NodeRecord> {
    fn record(&mut self, record: &NodeRecord) {
        self.push(record.clone());
    }
}

/// Feeds every record to `recorder`, in order.
pub fn replay<R: TreeRecorder + ?Sized>(records: &[NodeRecord], recorder: &mut R) {
    for record in records {
        recorder.record(record);
    }
}

/// Writes one indented line per node, with the label counts of each leaf.
pub struct TextRecorder<'a, YT: WholeNumber> {
    labels: &'a DVector<YT>,
    params: &'a TreeParams,
    lines: Vec<String>,
}

impl<'a, YT: WholeNumber> TextRecorder<'a, YT> {
    pub fn new(labels: &'a DVector<YT>, params: &'a TreeParams) -> Self {
        Self {
            labels,
            params,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }

    fn positives(&self, indices: &[usize]) -> usize {
        indices
            .iter()
            .filter_map(|&index| self.labels.get(index))
            .filter(|&&label| label == YT::one())
            .count()
    }
}

impl<YT: WholeNumber> TreeRecorder for TextRecorder<'_, YT> {
    fn record(&mut self, record: &NodeRecord) {
        let depth = record.depth as usize;
        let line = match record.feature_index {
            Some(feature_index) => format!(
                "{}Depth {}, {}: Split on feature: {} ({}), gain {:.2}",
                indent(0, depth),
                record.depth,
                record.branch,
                feature_index,
                self.params.feature_name(feature_index),
                record.information_gain
            ),
            None => format!(
                "{}{} leaf node with indices {:?} ({}/{} positive)",
                indent(depth, depth),
                record.branch,
                record.indices,
                self.positives(&record.indices),
                record.indices.len()
            ),
        };
        self.lines.push(line);
    }
}

/// `spaces` blanks and `dashes` dashes followed by a separator, or nothing at the root.
fn indent(spaces: usize, dashes: usize) -> String {
    if spaces + dashes == 0 {
        return String::new();
    }
    format!("{}{} ", " ".repeat(spaces), "-".repeat(dashes))
}

/// Renders a whole record sequence as text.
pub fn render_tree<YT: WholeNumber>(
    records: &[NodeRecord],
    labels: &DVector<YT>,
    params: &TreeParams,
) -> String {
    let mut recorder = TextRecorder::new(labels, params);
    replay(records, &mut recorder);
    recorder.finish()
}

/// One line per feature with the gain of splitting `node_indices` on it.
pub fn feature_gain_report<XT: WholeNumber, YT: WholeNumber>(
    dataset: &Dataset<XT, YT>,
    node_indices: &[usize],
    params: &TreeParams,
) -> Result<String> {
    let lines: Vec<String> = feature_gains(dataset, node_indices)?
        .into_iter()
        .enumerate()
        .map(|(feature_index, gain)| {
            let gain = gain.map_or("n/a".to_string(), |gain| format!("{:.2}", gain));
            format!(
                "Feature: {}, information gain if we split the node using this feature: {}",
                params.feature_name(feature_index),
                gain
            )
        })
        .collect();
    Ok(lines.join("\n"))
}
