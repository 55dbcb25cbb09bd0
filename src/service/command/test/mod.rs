use crate::{
    model::{
        command::{Command, CommandParseError},
        prompt::PromptSet,
        reply::{CommandReply, GOLD},
    },
    service::command::{
        chat_status::{NOT_MONITORED, NO_ACTIVITY},
        ping_random::{MEMBER_LOOKUP_FAILED, OUT_OF_RANGE},
        INVALID_NUMBER, MISSING_PERMISSIONS,
    },
    test_utils::{MockPlatform, TestBuilder},
};
