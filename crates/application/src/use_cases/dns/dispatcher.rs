use hickory_proto::rr::{Name, RecordType};
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use super::RequestCounter;
use crate::use_cases::zone::{Resolution, ResolverBinding};

/// The part of an incoming query the resolver cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Name,
    pub record_type: RecordType,
}

impl Question {
    pub fn new(name: Name, record_type: RecordType) -> Self {
        Self { name, record_type }
    }
}

/// Outcome of routing one request.
#[derive(Debug)]
pub enum Dispatch<'a> {
    /// The message carried no question; no resolver was consulted.
    NoQuestion { request_id: u64 },
    /// No binding is registered for the question's owner name.
    Unrouted { request_id: u64 },
    Answered {
        request_id: u64,
        binding: &'a ResolverBinding,
        resolution: Resolution<'a>,
    },
}

impl Dispatch<'_> {
    pub fn request_id(&self) -> u64 {
        match self {
            Dispatch::NoQuestion { request_id }
            | Dispatch::Unrouted { request_id }
            | Dispatch::Answered { request_id, .. } => *request_id,
        }
    }
}

/// Routes questions to the binding registered for their exact owner name.
///
/// Bindings are registered at startup and only read afterwards, so a shared
/// reference is enough to serve requests from any number of tasks.
#[derive(Debug, Default)]
pub struct ZoneDispatcher {
    bindings: FxHashMap<Name, ResolverBinding>,
    counter: RequestCounter,
}

impl ZoneDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, binding: ResolverBinding) -> Option<ResolverBinding> {
        let owner = binding.owner().clone();
        let replaced = self.bindings.insert(owner.clone(), binding);
        if replaced.is_some() {
            warn!(zone_id = %owner, "Replacing existing zone binding");
        }
        replaced
    }

    pub fn binding(&self, owner: &Name) -> Option<&ResolverBinding> {
        self.bindings.get(owner)
    }

    pub fn owners(&self) -> impl Iterator<Item = &Name> {
        self.bindings.keys()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn requests_seen(&self) -> u64 {
        self.counter.current()
    }

    /// Resolves the first question of a request.
    ///
    /// Every call consumes one request identifier, whatever the outcome.
    pub fn dispatch(&self, question: Option<&Question>) -> Dispatch<'_> {
        let request_id = self.counter.next();

        let Some(question) = question else {
            info!(request_id, has_question = false, "Received DNS query");
            return Dispatch::NoQuestion { request_id };
        };

        let Some(binding) = self.bindings.get(&question.name) else {
            info!(
                request_id,
                has_question = true,
                question_type = %question.record_type,
                "Received DNS query"
            );
            debug!(request_id, name = %question.name, "No zone registered for query name");
            return Dispatch::Unrouted { request_id };
        };

        info!(
            request_id,
            zone_id = %binding.owner(),
            has_question = true,
            question_type = %question.record_type,
            "Received DNS query"
        );

        let resolution = binding.resolve(question.record_type);
        info!(
            request_id,
            zone_id = %binding.owner(),
            answers = resolution.answers.len(),
            "Answering DNS query"
        );
        debug!(request_id, msg = ?resolution.answers, "Answer records");

        Dispatch::Answered {
            request_id,
            binding,
            resolution,
        }
    }
}
