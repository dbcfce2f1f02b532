use crate::error::{PedigreeError, Result};
use crate::member::{Member, MemberId};
use crate::record::Record;
use std::collections::HashMap;

/// A directed graph of a family: members are nodes, and every
/// relationship is an edge pointing from a parent to a child.
///
/// Members live in an arena in insertion order and are addressed by
/// `MemberId`. Edges are indexed both ways so parents and children are
/// found without scanning.
#[derive(Debug, Clone, Default)]
pub struct FamilyGraph {
    members: Vec<Member>,
    index: HashMap<String, MemberId>,
    children: Vec<Vec<MemberId>>,
    parents: Vec<Vec<MemberId>>,
}

impl FamilyGraph {
    /// Constructs a new empty `FamilyGraph`
    ///
    /// The graph can be filled up iteratively with `add_member()` and
    /// `add_relationship()`, or all at once with `observe()`.
    pub fn new() -> Self {
        Self {
            members: vec![],
            index: HashMap::new(),
            children: vec![],
            parents: vec![],
        }
    }

    /// Builds a graph from a stream of records, e.g. a `RecordReader`.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Record>>,
    {
        let mut graph = Self::new();
        graph.observe(records)?;
        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Registers a member under its name.
    pub fn add_member(&mut self, member: Member) -> Result<MemberId> {
        if self.index.contains_key(member.name()) {
            return Err(PedigreeError::DuplicateMember(member.name().to_string()));
        }
        let id = self.members.len();
        self.index.insert(member.name().to_string(), id);
        self.members.push(member);
        self.children.push(vec![]);
        self.parents.push(vec![]);
        Ok(id)
    }

    /// Adds a parent -> child edge between two registered members.
    ///
    /// A child has at most two parents, each listed once.
    pub fn add_relationship(&mut self, parent: &str, child: &str) -> Result<()> {
        let parent_id = self.id_of(parent)?;
        let child_id = self.id_of(child)?;

        let known = &self.parents[child_id];
        if known.contains(&parent_id) {
            return Err(PedigreeError::MalformedRecord(format!(
                "'{}' is listed twice as a parent of '{}'",
                parent, child
            )));
        }
        if known.len() >= 2 {
            return Err(PedigreeError::MalformedRecord(format!(
                "'{}' already has two parents, cannot add '{}'",
                child, parent
            )));
        }

        self.parents[child_id].push(parent_id);
        self.children[parent_id].push(child_id);
        Ok(())
    }

    /// Observe all the records in the argument.
    ///
    /// Every member is registered before any relationship is linked, so
    /// the records may list children before their parents.
    pub fn observe<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<Record>>,
    {
        let records = records.into_iter().collect::<Result<Vec<Record>>>()?;

        for record in records.iter() {
            self.add_member(Member::new(record.name(), record.has_power()))?;
        }
        for record in records.iter() {
            for parent in record.parents() {
                self.add_relationship(parent, record.name())?;
            }
        }

        log::debug!(
            "Observed {} records, graph now has {} members",
            records.len(),
            self.len()
        );
        Ok(())
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.index.get(name).map(|id| &self.members[*id])
    }

    /// All members, in insertion order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// Members one parent of whom is `name`, in insertion order.
    pub fn children_of(&self, name: &str) -> Result<Vec<&Member>> {
        let id = self.id_of(name)?;
        Ok(self.children[id].iter().map(|c| &self.members[*c]).collect())
    }

    /// Known parents of `name`, in the order their relationships were
    /// added, or an empty list if none are known.
    pub fn parents_of(&self, name: &str) -> Result<Vec<&Member>> {
        let id = self.id_of(name)?;
        Ok(self.parents[id].iter().map(|p| &self.members[*p]).collect())
    }

    pub fn has_parents(&self, name: &str) -> Result<bool> {
        Ok(!self.parents[self.id_of(name)?].is_empty())
    }

    pub(crate) fn id_of(&self, name: &str) -> Result<MemberId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| PedigreeError::UnknownMember(name.to_string()))
    }

    pub(crate) fn member_at(&self, id: MemberId) -> &Member {
        &self.members[id]
    }

    pub(crate) fn member_at_mut(&mut self, id: MemberId) -> &mut Member {
        &mut self.members[id]
    }

    pub(crate) fn parent_ids(&self, id: MemberId) -> &[MemberId] {
        &self.parents[id]
    }

    pub(crate) fn child_ids(&self, id: MemberId) -> &[MemberId] {
        &self.children[id]
    }
}
