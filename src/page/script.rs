use crate::reveal::{ease::Ease, schedule::RevealTiming};

/// Inline script running the reveal animation in the browser.
///
/// Mirrors [`crate::Animator`] and [`crate::RevealState`]: one animator object holding
/// `{rects, revealTimes, startTime, frameHandle}`, a step function, and a frame callback that
/// re-arms itself while the run is scheduled or running. `figure_ids` are the element ids
/// whose `rect` descendants take part.
pub fn reveal_script(timing: &RevealTiming, figure_ids: &[&str]) -> String {
    let mut js = String::with_capacity(SCRIPT_BODY.len() + 512);
    js.push_str("(function () {\n");
    js.push_str("    'use strict';\n");
    js.push_str(&format!("    var DURATION_MS = {};\n", timing.duration_ms));
    // Same cap as `RevealTiming::offset_for`, so no offset reaches the full duration.
    js.push_str(&format!(
        "    var LAST_OFFSET_MS = {};\n",
        timing.duration_ms.next_down()
    ));
    js.push_str(&format!("    var SETTLE_MS = {};\n", timing.settle_ms));
    js.push_str(&format!(
        "    var FIGURE_IDS = {};\n",
        js_string_array(figure_ids)
    ));
    js.push('\n');
    js.push_str(&reveal_offset_fn(timing.ease));
    js.push_str(SCRIPT_BODY);
    js.push_str("})();\n");
    js
}

fn reveal_offset_fn(ease: Ease) -> String {
    let mut js = String::new();
    js.push_str("    function revealOffset(i, n) {\n");
    match ease {
        Ease::Linear => {
            js.push_str("        return Math.min((DURATION_MS * i) / n, LAST_OFFSET_MS);\n")
        }
        other => {
            js.push_str("        var t = i / n;\n");
            js.push_str(&format!(
                "        return Math.min(DURATION_MS * ({}), LAST_OFFSET_MS);\n",
                other.js_expr()
            ));
        }
    }
    js.push_str("    }\n");
    js
}

fn js_string_array(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| js_string(s)).collect();
    format!("[{}]", quoted.join(", "))
}

fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

const SCRIPT_BODY: &str = r#"
    function shuffleInPlace(a) {
        for (var i = a.length - 1; i > 0; i--) {
            var j = Math.min(i, Math.floor(Math.random() * (i + 1)));
            var t = a[i]; a[i] = a[j]; a[j] = t;
        }
        return a;
    }

    function Animator(figureIds) {
        this.figureIds = figureIds;
        this.phase = 'idle';
        this.rects = [];
        this.revealTimes = [];
        this.revealed = 0;
        this.settleUntil = 0;
        this.startTime = null;
        this.frameHandle = null;
    }

    Animator.prototype.collect = function () {
        var rects = [];
        for (var k = 0; k < this.figureIds.length; k++) {
            var fig = document.getElementById(this.figureIds[k]);
            if (fig) rects = rects.concat(Array.prototype.slice.call(fig.querySelectorAll('rect')));
        }
        return rects;
    };

    Animator.prototype.start = function (now) {
        if (this.frameHandle !== null) {
            cancelAnimationFrame(this.frameHandle);
            this.frameHandle = null;
        }
        this.phase = 'collecting';
        this.revealTimes = [];
        this.revealed = 0;
        this.startTime = null;

        var rects = this.collect();
        if (rects.length === 0) {
            this.rects = [];
            this.phase = 'idle';
            return;
        }

        this.rects = shuffleInPlace(rects);
        for (var i = 0; i < rects.length; i++) {
            this.revealTimes[i] = revealOffset(i, rects.length);
            rects[i].style.opacity = '0';
        }
        this.settleUntil = now + SETTLE_MS;
        this.phase = 'scheduled';
        this.requestFrame();
    };

    Animator.prototype.advance = function (now) {
        if (this.phase === 'scheduled') {
            if (now < this.settleUntil) return;
            this.phase = 'running';
            this.startTime = now;
        }
        if (this.phase !== 'running') return;

        var elapsed = now - this.startTime;
        var n = this.rects.length;
        var revealed = this.revealed;
        while (revealed < n && this.revealTimes[revealed] <= elapsed) revealed++;
        if (elapsed >= DURATION_MS) {
            revealed = n;
            this.phase = 'done';
        }
        this.revealed = revealed;
    };

    Animator.prototype.onFrame = function (now) {
        this.frameHandle = null;
        var before = this.revealed;
        this.advance(now);
        for (var i = before; i < this.revealed; i++) this.rects[i].style.opacity = '1';
        if (this.phase === 'scheduled' || this.phase === 'running') this.requestFrame();
    };

    Animator.prototype.requestFrame = function () {
        var self = this;
        this.frameHandle = requestAnimationFrame(function (now) { self.onFrame(now); });
    };

    var animator = new Animator(FIGURE_IDS);

    function start() {
        animator.start(performance.now());
    }

    window.pixelReveal = { restart: start };

    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', start);
    } else {
        start();
    }
"#;

#[cfg(test)]
#[path = "../../tests/unit/page/script.rs"]
mod tests;
