//! Observable attribute binding
//!
//! [`AttributeBinding`] owns an [`AttributeSet`] and notifies subscribers
//! whenever a write actually changes a value. Writes made inside
//! [`AttributeBinding::update`] are coalesced into a single notification
//! carrying the final state.

use crate::attributes::{Attribute, AttributeSet};

pub type Subscriber = Box<dyn FnMut(&AttributeSet, &[Attribute])>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct AttributeBinding {
    values: AttributeSet,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl AttributeBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &AttributeSet {
        &self.values
    }

    pub fn get(&self, attr: Attribute) -> Option<&str> {
        self.values.get(attr)
    }

    /// Returns true if the value changed and subscribers were notified
    pub fn set(&mut self, attr: Attribute, value: impl Into<String>) -> bool {
        if !self.values.set(attr, value) {
            return false;
        }
        self.notify(&[attr]);
        true
    }

    pub fn remove(&mut self, attr: Attribute) -> bool {
        if !self.values.remove(attr) {
            return false;
        }
        self.notify(&[attr]);
        true
    }

    /// Apply several writes at once. Subscribers are notified at most once,
    /// with the attributes whose final value differs from the value before
    /// the batch. Returns those attributes.
    pub fn update<F>(&mut self, apply: F) -> Vec<Attribute>
    where
        F: FnOnce(&mut AttributeSet),
    {
        let before = self.values.clone();
        apply(&mut self.values);

        let changed: Vec<Attribute> = Attribute::ALL
            .into_iter()
            .filter(|attr| before.get(*attr) != self.values.get(*attr))
            .collect();

        if !changed.is_empty() {
            self.notify(&changed);
        }
        changed
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&AttributeSet, &[Attribute]) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self, changed: &[Attribute]) {
        tracing::trace!(?changed, subscribers = self.subscribers.len(), "Attributes changed");
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.values, changed);
        }
    }
}

impl std::fmt::Debug for AttributeBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeBinding")
            .field("values", &self.values)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(binding: &mut AttributeBinding) -> Rc<RefCell<Vec<Vec<Attribute>>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        binding.subscribe(move |_, changed| sink.borrow_mut().push(changed.to_vec()));
        log
    }

    #[test]
    fn test_notifies_only_on_change() {
        let mut binding = AttributeBinding::new();
        let log = recording(&mut binding);

        assert!(binding.set(Attribute::Name, "Asha"));
        assert!(!binding.set(Attribute::Name, "Asha"));
        assert!(!binding.remove(Attribute::City));
        assert!(binding.remove(Attribute::Name));

        assert_eq!(*log.borrow(), vec![vec![Attribute::Name], vec![Attribute::Name]]);
    }

    #[test]
    fn test_batch_is_coalesced() {
        let mut binding = AttributeBinding::new();
        let log = recording(&mut binding);

        let changed = binding.update(|attrs| {
            attrs.set(Attribute::Name, "Asha");
            attrs.set(Attribute::Price, "$10/hr");
            attrs.set(Attribute::Price, "$12/hr");
        });

        assert_eq!(changed, vec![Attribute::Name, Attribute::Price]);
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(binding.get(Attribute::Price), Some("$12/hr"));
    }

    #[test]
    fn test_batch_without_net_change_is_silent() {
        let mut binding = AttributeBinding::new();
        binding.set(Attribute::Price, "$10/hr");
        let log = recording(&mut binding);

        let changed = binding.update(|attrs| {
            attrs.set(Attribute::Price, "$15/hr");
            attrs.set(Attribute::Price, "$10/hr");
        });

        assert!(changed.is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_unsubscribe() {
        let mut binding = AttributeBinding::new();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = binding.subscribe(move |_, _| *sink.borrow_mut() += 1);

        binding.set(Attribute::Id, "1");
        assert!(binding.unsubscribe(id));
        assert!(!binding.unsubscribe(id));
        binding.set(Attribute::Id, "2");

        assert_eq!(*count.borrow(), 1);
    }
}
