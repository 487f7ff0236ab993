/// Full usage text printed by `-h/--help`
pub fn help_text() -> String {
    format!(
        "slop v{version}

Copyright (C) 2017 Dalton Nell, Slop Contributors
(https://github.com/naelstrof/slop/graphs/contributors)
Usage: slop [options]

slop (Select Operation) is an application that queries for a selection from the
user and prints the region to stdout.

-h, --help                    Print help and exit
-v, --version                 Print version and exit
Options
  -x, --xdisplay=hostname:number.screen_number
                                Sets the x display.
  -k, --nokeyboard              Disables the ability to cancel selections with
                                  the keyboard.  (default=off)
  -b, --bordersize=FLOAT        Set the selection rectangle's thickness.
                                  (default=`1')
  -p, --padding=FLOAT           Set the padding size of the selection. Can be
                                  negative.  (default=`0')
  -t, --tolerance=FLOAT         How far in pixels the mouse can move after
                                  clicking and still be detected as a normal
                                  click instead of a click and drag. Setting
                                  this to 0 will disable window selections.
                                  Alternatively setting it to 999999 would
                                  only allow for window selections.
                                  (default=`2')
  -c, --color=FLOAT,FLOAT,FLOAT,FLOAT
                                Set the selection rectangle's color. Supports
                                  RGB or RGBA values.
                                  (default=`0.5,0.5,0.5,1')
  -n, --nodecorations=INT       Attempt to select child windows in order to
                                  avoid window decorations. Setting this to
                                  1 will enable a light attempt to
                                  remove decorations. Setting this to 2 will
                                  enable aggressive decoration removal.
                                  Supplying slop with just `-n` is
                                  equivalent to supplying `-n1`.
                                  (default=`0')
  -q, --quiet                   Disable any unnecessary cerr output. Any
                                  warnings simply won't print.
  -l, --highlight               Instead of outlining selections, slop
                                  highlights it. This is only useful when
                                  --color is set to a transparent color.
                                  (default=off)
  -r, --shader=STRING           Sets the shader to load and use from
                                  ~/.config/slop/
  -f, --format=STRING           Set the output format string. Format specifiers
                                  are %x, %y, %w, %h, %i, %g, and %c.
                                  (default=`%g\\n')
  -o, --noopengl                Disable graphics acceleration.
      --debug                   Print debug logging to stderr.
Selection engine
    The selection itself is performed by an external engine program. It is
    taken from the SLOP_ENGINE environment variable, then the \"engine\" entry
    of ~/.config/slop/config.json, and defaults to `slop-engine'.
Examples
    $ # Gray, thick, transparent border for maximum visiblity.
    $ slop -b 20 -c 0.5,0.5,0.5,0.8

    $ # Remove window decorations.
    $ slop --nodecorations

    $ # Disable window selections. Useful for selecting individual pixels.
    $ slop -t 0

    $ # Classic Windows XP selection.
    $ slop -l -c 0.3,0.4,0.6,0.4

    $ # Read slop output for use in scripts.
    $ read -r X Y W H G ID < <(slop -f '%x %y %w %h %g %i')

Tips
    * If you don't like a selection: you can cancel it by right-clicking
regardless of which options are enabled or disabled for slop.
    * If slop doesn't seem to select a window accurately, the problem could be
because of decorations getting in the way. Try enabling the --nodecorations
flag.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
