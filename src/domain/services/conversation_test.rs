use super::Conversation;
use super::MessageAction;
use super::REGENERATED_RESPONSE;
use crate::domain::models::Author;
use crate::domain::models::CompletionResponse;
use crate::domain::models::SessionId;

const SIMULATED_REPLY: &str = "This is a simulated AI response to your message.";

fn completion(session_id: SessionId) -> CompletionResponse {
    return CompletionResponse {
        session_id,
        author: Author::Assistant,
        text: SIMULATED_REPLY.to_string(),
    };
}

fn assert_mirror_in_sync(conversation: &Conversation) {
    match conversation.active_session_id() {
        Some(id) => {
            let session = conversation
                .sessions()
                .iter()
                .find(|session| return session.id == id)
                .unwrap();
            assert_eq!(session.messages.as_slice(), conversation.messages());
        }
        None => assert!(conversation.messages().is_empty()),
    }
}

mod submit {
    use super::*;

    #[test]
    fn it_creates_a_session_on_first_send() {
        let mut conversation = Conversation::new();
        let prompt = conversation.submit("Hello").unwrap();

        assert_eq!(prompt.session_id, 1);
        assert_eq!(prompt.text, "Hello");
        assert_eq!(conversation.sessions().len(), 1);
        assert_eq!(conversation.sessions()[0].title, "New Chat 1");
        assert_eq!(conversation.active_session_id(), Some(1));
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.messages()[0].author, Author::User);
        assert_eq!(conversation.messages()[0].text, "Hello");
        assert!(conversation.is_generating());
        assert_eq!(conversation.pending_session_id(), Some(1));
        assert_mirror_in_sync(&conversation);
    }

    #[test]
    fn it_ignores_empty_input() {
        let mut conversation = Conversation::new();

        assert!(conversation.submit("").is_none());
        assert!(conversation.submit("   \n\t  ").is_none());
        assert!(conversation.sessions().is_empty());
        assert!(conversation.messages().is_empty());
        assert!(!conversation.is_generating());
    }

    #[test]
    fn it_keeps_surrounding_whitespace_in_the_stored_message() {
        let mut conversation = Conversation::new();
        let prompt = conversation.submit("  Hello  ").unwrap();

        assert_eq!(prompt.text, "Hello");
        assert_eq!(conversation.messages()[0].text, "  Hello  ");
    }

    #[test]
    fn it_appends_to_the_active_session() {
        let mut conversation = Conversation::new();
        conversation.submit("Hello").unwrap();
        conversation.complete(&completion(1));
        conversation.submit("And another thing").unwrap();

        assert_eq!(conversation.sessions().len(), 1);
        assert_eq!(conversation.messages().len(), 3);
        assert_eq!(conversation.messages()[2].text, "And another thing");
        assert_mirror_in_sync(&conversation);
    }

    #[test]
    fn it_grows_the_thread_by_one_then_two() {
        let mut conversation = Conversation::new();
        conversation.submit("Hello").unwrap();
        assert_eq!(conversation.messages().len(), 1);

        conversation.complete(&completion(1));
        assert_eq!(conversation.messages().len(), 2);
        assert_eq!(conversation.messages()[1].author, Author::Assistant);
        assert_eq!(conversation.messages()[1].text, SIMULATED_REPLY);
        assert!(!conversation.is_generating());
        assert_mirror_in_sync(&conversation);
    }
}

mod complete {
    use super::*;

    #[test]
    fn it_routes_to_the_submit_time_session() {
        let mut conversation = Conversation::new();
        conversation.submit("Hello").unwrap();
        assert!(conversation.start_new_session());

        conversation.complete(&completion(1));

        let original = conversation
            .sessions()
            .iter()
            .find(|session| return session.id == 1)
            .unwrap();
        assert_eq!(original.messages.len(), 2);
        assert_eq!(original.messages[1].text, SIMULATED_REPLY);
        assert!(conversation.messages().is_empty());
        assert!(!conversation.is_generating());
        assert_mirror_in_sync(&conversation);
    }

    #[test]
    fn it_drops_replies_for_unknown_sessions() {
        let mut conversation = Conversation::new();
        conversation.complete(&completion(99));

        assert!(conversation.sessions().is_empty());
        assert!(conversation.messages().is_empty());
        assert!(!conversation.is_generating());
    }

    #[test]
    fn it_clears_the_pending_marker() {
        let mut conversation = Conversation::new();
        conversation.submit("Hello").unwrap();
        conversation.complete(&completion(1));

        assert_eq!(conversation.pending_session_id(), None);
    }
}

mod cancel_generation {
    use super::*;

    #[test]
    fn it_clears_the_flag_without_appending() {
        let mut conversation = Conversation::new();
        conversation.submit("Hello").unwrap();
        conversation.cancel_generation();

        assert!(!conversation.is_generating());
        assert_eq!(conversation.pending_session_id(), None);
        assert_eq!(conversation.messages().len(), 1);
        assert_mirror_in_sync(&conversation);
    }
}

mod start_new_session {
    use super::*;

    #[test]
    fn it_is_a_no_op_while_the_thread_is_empty() {
        let mut conversation = Conversation::new();
        assert!(!conversation.start_new_session());
        assert!(conversation.sessions().is_empty());
        assert_eq!(conversation.active_session_id(), None);
    }

    #[test]
    fn it_is_a_no_op_right_after_a_new_session() {
        let mut conversation = Conversation::new();
        conversation.submit("Hello").unwrap();
        assert!(conversation.start_new_session());
        assert!(!conversation.start_new_session());
        assert_eq!(conversation.sessions().len(), 2);
    }

    #[test]
    fn it_prepends_and_activates_an_empty_session() {
        let mut conversation = Conversation::new();
        conversation.submit("Hello").unwrap();
        assert!(conversation.start_new_session());

        assert_eq!(conversation.sessions().len(), 2);
        assert_eq!(conversation.sessions()[0].id, 2);
        assert_eq!(conversation.sessions()[0].title, "New Chat 2");
        assert_eq!(conversation.sessions()[1].id, 1);
        assert_eq!(conversation.active_session_id(), Some(2));
        assert!(conversation.messages().is_empty());
        assert!(!conversation.is_empty());
        assert_mirror_in_sync(&conversation);
    }
}

mod select_session {
    use super::*;

    #[test]
    fn it_swaps_the_visible_thread() {
        let mut conversation = Conversation::new();
        conversation.submit("First chat").unwrap();
        conversation.complete(&completion(1));
        conversation.start_new_session();
        conversation.submit("Second chat").unwrap();
        conversation.complete(&completion(2));

        assert!(conversation.select_session(1));

        assert_eq!(conversation.active_session_id(), Some(1));
        assert_eq!(conversation.messages().len(), 2);
        assert_eq!(conversation.messages()[0].text, "First chat");
        assert_mirror_in_sync(&conversation);
    }

    #[test]
    fn it_ignores_unknown_ids() {
        let mut conversation = Conversation::new();
        conversation.submit("Hello").unwrap();

        assert!(!conversation.select_session(42));
        assert_eq!(conversation.active_session_id(), Some(1));
        assert_eq!(conversation.messages().len(), 1);
    }

    #[test]
    fn it_does_not_suppress_a_pending_generation() {
        let mut conversation = Conversation::new();
        conversation.submit("First chat").unwrap();
        conversation.complete(&completion(1));
        conversation.start_new_session();
        conversation.submit("Second chat").unwrap();

        assert!(conversation.select_session(1));
        assert!(conversation.is_generating());

        conversation.complete(&completion(2));
        let second = conversation
            .sessions()
            .iter()
            .find(|session| return session.id == 2)
            .unwrap();
        assert_eq!(second.messages.len(), 2);
        assert_eq!(conversation.messages().len(), 2);
        assert_mirror_in_sync(&conversation);
    }
}

mod neighbor_session_id {
    use super::*;

    #[test]
    fn it_steps_through_display_order() {
        let mut conversation = Conversation::new();
        conversation.submit("First chat").unwrap();
        conversation.complete(&completion(1));
        conversation.start_new_session();

        // Session 2 sits at the top of the sidebar.
        assert_eq!(conversation.neighbor_session_id(1), Some(1));
        assert_eq!(conversation.neighbor_session_id(-1), None);

        conversation.select_session(1);
        assert_eq!(conversation.neighbor_session_id(-1), Some(2));
        assert_eq!(conversation.neighbor_session_id(1), None);
    }

    #[test]
    fn it_returns_nothing_without_sessions() {
        let conversation = Conversation::new();
        assert_eq!(conversation.neighbor_session_id(1), None);
    }
}

mod regenerate_last {
    use super::*;

    #[test]
    fn it_is_a_no_op_on_an_empty_thread() {
        let mut conversation = Conversation::new();
        assert!(!conversation.regenerate_last());
    }

    #[test]
    fn it_is_a_no_op_when_the_last_message_is_from_the_user() {
        let mut conversation = Conversation::new();
        conversation.submit("Hello").unwrap();

        assert!(!conversation.regenerate_last());
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.messages()[0].text, "Hello");
    }

    #[test]
    fn it_replaces_only_the_last_reply() {
        let mut conversation = Conversation::new();
        conversation.submit("Hello").unwrap();
        conversation.complete(&completion(1));
        let replaced_id = conversation.messages()[1].id;

        assert!(conversation.regenerate_last());

        assert_eq!(conversation.messages().len(), 2);
        assert_eq!(conversation.messages()[0].text, "Hello");
        assert_eq!(conversation.messages()[1].text, REGENERATED_RESPONSE);
        assert_ne!(conversation.messages()[1].id, replaced_id);
        assert_mirror_in_sync(&conversation);
    }
}

mod toggle_action {
    use super::*;

    #[test]
    fn it_flips_and_restores() {
        let mut conversation = Conversation::new();
        conversation.submit("Hello").unwrap();
        conversation.complete(&completion(1));
        let id = conversation.messages()[1].id;

        assert!(conversation.toggle_action(id, MessageAction::Copy));
        assert!(conversation.action_state(id, MessageAction::Copy));
        assert!(!conversation.toggle_action(id, MessageAction::Copy));
        assert!(!conversation.action_state(id, MessageAction::Copy));
    }

    #[test]
    fn it_tracks_actions_independently() {
        let mut conversation = Conversation::new();
        conversation.submit("Hello").unwrap();
        conversation.complete(&completion(1));
        let id = conversation.messages()[1].id;

        conversation.toggle_action(id, MessageAction::Like);

        assert!(conversation.action_state(id, MessageAction::Like));
        assert!(!conversation.action_state(id, MessageAction::Dislike));
        assert!(!conversation.action_state(id, MessageAction::Copy));
    }

    #[test]
    fn it_orphans_feedback_when_a_reply_is_regenerated() {
        let mut conversation = Conversation::new();
        conversation.submit("Hello").unwrap();
        conversation.complete(&completion(1));
        let old_id = conversation.messages()[1].id;
        conversation.toggle_action(old_id, MessageAction::Like);

        conversation.regenerate_last();
        let new_id = conversation.messages()[1].id;

        assert!(!conversation.action_state(new_id, MessageAction::Like));
    }
}

mod lookups {
    use super::*;

    #[test]
    fn it_finds_messages_by_one_based_position() {
        let mut conversation = Conversation::new();
        conversation.submit("Hello").unwrap();
        conversation.complete(&completion(1));

        assert_eq!(conversation.message_at(1).unwrap().text, "Hello");
        assert_eq!(conversation.message_at(2).unwrap().author, Author::Assistant);
        assert!(conversation.message_at(0).is_none());
        assert!(conversation.message_at(3).is_none());
    }

    #[test]
    fn it_finds_the_last_assistant_message() {
        let mut conversation = Conversation::new();
        assert!(conversation.last_assistant_message().is_none());

        conversation.submit("Hello").unwrap();
        assert!(conversation.last_assistant_message().is_none());

        conversation.complete(&completion(1));
        conversation.submit("More").unwrap();

        let last = conversation.last_assistant_message().unwrap();
        assert_eq!(last.text, SIMULATED_REPLY);
    }
}

// The walkthrough from the product description: first send creates the chat,
// the delayed reply lands, regenerate swaps only the reply text.
#[test]
fn it_plays_the_first_conversation_end_to_end() {
    let mut conversation = Conversation::new();
    assert!(conversation.is_empty());

    conversation.submit("Hello").unwrap();
    assert_eq!(conversation.sessions().len(), 1);
    assert_eq!(conversation.sessions()[0].title, "New Chat 1");
    assert_eq!(conversation.messages().len(), 1);

    conversation.complete(&completion(1));
    assert_eq!(conversation.messages().len(), 2);
    assert_eq!(conversation.messages()[1].text, SIMULATED_REPLY);

    conversation.regenerate_last();
    assert_eq!(conversation.messages().len(), 2);
    assert_eq!(conversation.messages()[1].text, REGENERATED_RESPONSE);
    assert_mirror_in_sync(&conversation);
}
