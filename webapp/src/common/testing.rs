// helpers for driving a live VirtualDom from tests
//
// events are delivered the way a renderer would: as serialized html event data looked up by
// the element id the listener was registered on

use std::{any::Any, rc::Rc};

use dioxus_core::{AttributeValue, ElementId, Event, Mutation, VirtualDom};
use dioxus_html::{
    FormValue, PlatformEventData, SerializedFormData, SerializedHtmlEventConverter,
    SerializedMouseData, set_event_converter,
};

pub fn use_serialized_events() {
    set_event_converter(Box::new(SerializedHtmlEventConverter));
}

pub fn listeners(edits: &[Mutation], event: &str) -> Vec<ElementId> {
    edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name.as_str() == event => Some(*id),
            _ => None,
        })
        .collect()
}

// first text attribute with this name, and the element it was set on
pub fn attribute(edits: &[Mutation], attribute: &str) -> Option<(ElementId, String)> {
    edits.iter().find_map(|edit| match edit {
        Mutation::SetAttribute {
            name,
            value: AttributeValue::Text(value),
            id,
            ..
        } if *name == attribute => Some((*id, value.clone())),
        _ => None,
    })
}

pub fn element_with(edits: &[Mutation], attribute: &str, wanted: &str) -> Option<ElementId> {
    edits.iter().find_map(|edit| match edit {
        Mutation::SetAttribute {
            name,
            value: AttributeValue::Text(value),
            id,
            ..
        } if *name == attribute && value.as_str() == wanted => Some(*id),
        _ => None,
    })
}

// returns the delivered event so callers can check whether the default action survived
fn fire(dom: &VirtualDom, name: &str, id: ElementId, data: Box<dyn Any>) -> Event<dyn Any> {
    let event = Event::new(Rc::new(PlatformEventData::new(data)) as Rc<dyn Any>, true);
    dom.runtime().handle_event(name, event.clone(), id);
    event
}

pub fn click(dom: &VirtualDom, id: ElementId) -> Event<dyn Any> {
    fire(dom, "click", id, Box::new(SerializedMouseData::default()))
}

pub fn submit(dom: &VirtualDom, id: ElementId, fields: &[(&str, &str)]) -> Event<dyn Any> {
    let values = fields
        .iter()
        .map(|(name, value)| (name.to_string(), FormValue(vec![value.to_string()])))
        .collect();
    let value = fields.first().map(|(_, value)| value.to_string()).unwrap_or_default();

    fire(dom, "submit", id, Box::new(SerializedFormData::new(value, values)))
}
