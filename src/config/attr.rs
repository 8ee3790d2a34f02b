use super::{Opts, Role};
use crate::event::EventConfig;
use crate::ffi::{bindings as b, Attr};

pub(crate) fn from(event_cfg: EventConfig, opts: &Opts) -> Attr {
    let mut attr = Attr {
        size: size_of::<Attr>() as _,
        ..Default::default()
    };

    // event config:

    attr.type_ = event_cfg.ty;
    attr.config = event_cfg.config;

    // count config:

    macro_rules! when {
        ($bool:expr, $then:tt) => {
            if $bool {
                attr.$then(1);
            }
        };
    }
    when!(opts.exclude.kernel, set_exclude_kernel);
    when!(opts.exclude.hv, set_exclude_hv);
    when!(opts.inherit, set_inherit);

    // Only a group leader can be pinned:
    // https://github.com/torvalds/linux/blob/v6.13/kernel/events/core.c#L12982
    match opts.role {
        Role::Leader => {
            attr.set_pinned(1);
            attr.set_disabled(1);
            attr.read_format =
                (b::PERF_FORMAT_TOTAL_TIME_ENABLED | b::PERF_FORMAT_TOTAL_TIME_RUNNING) as _;
        }
        Role::Member => {
            attr.set_disabled(0);
            attr.read_format = 0;
        }
    }

    attr
}
