use lexis_core::models::*;

#[test]
fn whitespace_query_is_empty() {
    assert!(Query::new("   ").is_empty());
    assert!(Query::new("").is_empty());
    assert!(!Query::new("Wann ist die Frist?").is_empty());
}

#[test]
fn query_defaults_to_general_relevance() {
    assert_eq!(Query::new("x").relevance, Relevance::General);
}

#[test]
fn conversation_has_system_then_user() {
    let c = Conversation::new("sys", "prompt");
    assert_eq!(c.messages.len(), 2);
    assert_eq!(c.messages[0].role, Role::System);
    assert_eq!(c.messages[1].role, Role::User);
    assert_eq!(c.user_prompt(), Some("prompt"));
}

#[test]
fn conversation_serializes_lowercase_roles() {
    let json = serde_json::to_value(Conversation::new("a", "b")).unwrap();
    assert_eq!(json["messages"][0]["role"], "system");
    assert_eq!(json["messages"][1]["role"], "user");
}

#[test]
fn relevance_serializes_with_wire_names() {
    assert_eq!(
        serde_json::to_string(&Relevance::MailVoting).unwrap(),
        "\"mail-voting\""
    );
    assert_eq!(serde_json::to_string(&Relevance::General).unwrap(), "\"none\"");
}

#[test]
fn answer_outcome_accessors() {
    let a = AnswerOutcome::Answered("Ja.".into());
    assert_eq!(a.answer(), Some("Ja."));
    assert!(a.is_answered());

    let u = AnswerOutcome::Unavailable {
        reason: "empty response".into(),
    };
    assert_eq!(u.answer(), None);
    assert!(!u.is_answered());
}

#[test]
fn relevance_deserializes_leniently() {
    let r: Relevance = serde_json::from_str("\"mail_voting\"").unwrap();
    assert_eq!(r, Relevance::MailVoting);
    let r: Relevance = serde_json::from_str("\"referendum\"").unwrap();
    assert_eq!(r, Relevance::General);
}

#[test]
fn query_with_unknown_relevance_falls_back_to_none() {
    let q: Query =
        serde_json::from_str(r#"{"text": "Wer darf abstimmen?", "relevance": "referendum"}"#)
            .unwrap();
    assert_eq!(q.relevance, Relevance::General);

    let q: Query = serde_json::from_str(r#"{"text": "Versammlung?", "relevance": "assembly"}"#)
        .unwrap();
    assert_eq!(q.relevance, Relevance::Assembly);
}
